//! Resource tags. These operations use camelCase wire names; the resource
//! ARN and the keys to remove are sent in the URI.

use connect_sdk_json_mapper::{json_record, IndexMap};

json_record! {
    pub struct TagResourceRequest {
        tags: IndexMap<String, String> => "tags",
    }
}

json_record! {
    pub struct UntagResourceRequest {}
}

json_record! {
    pub struct ListTagsForResourceRequest {}
}

json_record! {
    pub struct ListTagsForResourceResponse {
        tags: IndexMap<String, String> => "tags",
    }
}
