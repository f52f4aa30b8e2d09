//! Users, their identity and phone configuration.

use connect_sdk_json_mapper::{json_enum, json_record, IndexMap};

json_enum! {
    pub enum PhoneType {
        SoftPhone => "SOFT_PHONE",
        DeskPhone => "DESK_PHONE",
    }
}

json_record! {
    pub struct UserIdentityInfo {
        first_name: String => "FirstName",
        last_name: String => "LastName",
        email: String => "Email",
    }
}

json_record! {
    pub struct UserPhoneConfig {
        phone_type: PhoneType => "PhoneType",
        auto_accept: bool => "AutoAccept",
        after_contact_work_time_limit: i32 => "AfterContactWorkTimeLimit",
        desk_phone_number: String => "DeskPhoneNumber",
    }
}

json_record! {
    pub struct User {
        id: String => "Id",
        arn: String => "Arn",
        username: String => "Username",
        identity_info: UserIdentityInfo => "IdentityInfo",
        phone_config: UserPhoneConfig => "PhoneConfig",
        directory_user_id: String => "DirectoryUserId",
        security_profile_ids: Vec<String> => "SecurityProfileIds",
        routing_profile_id: String => "RoutingProfileId",
        hierarchy_group_id: String => "HierarchyGroupId",
        tags: IndexMap<String, String> => "Tags",
    }
}

json_record! {
    pub struct UserSummary {
        id: String => "Id",
        arn: String => "Arn",
        username: String => "Username",
    }
}

json_record! {
    pub struct CreateUserRequest {
        username: String => "Username",
        password: String => "Password",
        identity_info: UserIdentityInfo => "IdentityInfo",
        phone_config: UserPhoneConfig => "PhoneConfig",
        directory_user_id: String => "DirectoryUserId",
        security_profile_ids: Vec<String> => "SecurityProfileIds",
        routing_profile_id: String => "RoutingProfileId",
        hierarchy_group_id: String => "HierarchyGroupId",
        tags: IndexMap<String, String> => "Tags",
    }
}

json_record! {
    pub struct CreateUserResponse {
        user_id: String => "UserId",
        user_arn: String => "UserArn",
    }
}

json_record! {
    pub struct DescribeUserResponse {
        user: User => "User",
    }
}

json_record! {
    pub struct ListUsersResponse {
        user_summary_list: Vec<UserSummary> => "UserSummaryList",
        next_token: String => "NextToken",
    }
}

json_record! {
    pub struct UpdateUserPhoneConfigRequest {
        phone_config: UserPhoneConfig => "PhoneConfig",
    }
}
