//! Contact flow listing.

use connect_sdk_json_mapper::{json_enum, json_record};

json_enum! {
    pub enum ContactFlowType {
        ContactFlow => "CONTACT_FLOW",
        CustomerQueue => "CUSTOMER_QUEUE",
        CustomerHold => "CUSTOMER_HOLD",
        CustomerWhisper => "CUSTOMER_WHISPER",
        AgentHold => "AGENT_HOLD",
        AgentWhisper => "AGENT_WHISPER",
        OutboundWhisper => "OUTBOUND_WHISPER",
        AgentTransfer => "AGENT_TRANSFER",
        QueueTransfer => "QUEUE_TRANSFER",
    }
}

json_record! {
    pub struct ContactFlowSummary {
        id: String => "Id",
        arn: String => "Arn",
        name: String => "Name",
        contact_flow_type: ContactFlowType => "ContactFlowType",
    }
}

json_record! {
    /// Instance, type filter and paging travel in the URI.
    pub struct ListContactFlowsRequest {}
}

json_record! {
    pub struct ListContactFlowsResponse {
        contact_flow_summary_list: Vec<ContactFlowSummary> => "ContactFlowSummaryList",
        next_token: String => "NextToken",
    }
}

#[cfg(test)]
mod tests {
    use connect_sdk_json_mapper::{from_json_str, to_json_string};

    use super::*;

    #[test]
    fn test_list_result() {
        let json = r#"{"ContactFlowSummaryList":[{"Id":"f-1","Name":"Default","ContactFlowType":"CONTACT_FLOW"},{"Id":"f-2","ContactFlowType":"CAMPAIGN"}],"NextToken":"t"}"#;
        let result: ListContactFlowsResponse = from_json_str(json).unwrap().unwrap();
        let flows = result.contact_flow_summary_list.as_deref().unwrap();
        assert_eq!(flows[0].contact_flow_type, Some(ContactFlowType::ContactFlow));
        assert_eq!(
            flows[1].contact_flow_type,
            Some(ContactFlowType::Unknown("CAMPAIGN".to_owned()))
        );
        assert_eq!(to_json_string(&result).unwrap(), json);
    }

    #[test]
    fn test_request_has_empty_body() {
        assert_eq!(to_json_string(&ListContactFlowsRequest {}).unwrap(), "{}");
        let request: ListContactFlowsRequest =
            from_json_str(r#"{"InstanceId":"i-1","MaxResults":100}"#).unwrap().unwrap();
        assert_eq!(request, ListContactFlowsRequest::default());
    }
}
