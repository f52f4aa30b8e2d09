//! Contacts, contact attributes and federation credentials.

use connect_sdk_json_mapper::{json_record, IndexMap, OffsetDateTime};

json_record! {
    pub struct GetContactAttributesResponse {
        attributes: IndexMap<String, String> => "Attributes",
    }
}

json_record! {
    pub struct UpdateContactAttributesRequest {
        initial_contact_id: String => "InitialContactId",
        instance_id: String => "InstanceId",
        attributes: IndexMap<String, String> => "Attributes",
    }
}

json_record! {
    pub struct StartOutboundVoiceContactRequest {
        destination_phone_number: String => "DestinationPhoneNumber",
        contact_flow_id: String => "ContactFlowId",
        instance_id: String => "InstanceId",
        client_token: String => "ClientToken",
        source_phone_number: String => "SourcePhoneNumber",
        queue_id: String => "QueueId",
        attributes: IndexMap<String, String> => "Attributes",
    }
}

json_record! {
    pub struct StartOutboundVoiceContactResponse {
        contact_id: String => "ContactId",
    }
}

json_record! {
    pub struct StopContactRequest {
        contact_id: String => "ContactId",
        instance_id: String => "InstanceId",
    }
}

json_record! {
    pub struct Credentials {
        access_token: String => "AccessToken",
        access_token_expiration: OffsetDateTime => "AccessTokenExpiration",
        refresh_token: String => "RefreshToken",
        refresh_token_expiration: OffsetDateTime => "RefreshTokenExpiration",
    }
}

json_record! {
    pub struct GetFederationTokenResponse {
        credentials: Credentials => "Credentials",
    }
}
