//! Queues, hours of operation and routing profiles.

use connect_sdk_json_mapper::{json_enum, json_record};

json_enum! {
    pub enum QueueType {
        Standard => "STANDARD",
        Agent => "AGENT",
    }
}

json_record! {
    pub struct QueueSummary {
        id: String => "Id",
        arn: String => "Arn",
        name: String => "Name",
        queue_type: QueueType => "QueueType",
    }
}

json_record! {
    pub struct ListQueuesRequest {}
}

json_record! {
    pub struct ListQueuesResponse {
        queue_summary_list: Vec<QueueSummary> => "QueueSummaryList",
        next_token: String => "NextToken",
    }
}

json_record! {
    pub struct HoursOfOperationSummary {
        id: String => "Id",
        arn: String => "Arn",
        name: String => "Name",
    }
}

json_record! {
    pub struct ListHoursOfOperationsResponse {
        hours_of_operation_summary_list: Vec<HoursOfOperationSummary> => "HoursOfOperationSummaryList",
        next_token: String => "NextToken",
    }
}

json_record! {
    pub struct RoutingProfileSummary {
        id: String => "Id",
        arn: String => "Arn",
        name: String => "Name",
    }
}

json_record! {
    pub struct ListRoutingProfilesResponse {
        routing_profile_summary_list: Vec<RoutingProfileSummary> => "RoutingProfileSummaryList",
        next_token: String => "NextToken",
    }
}
