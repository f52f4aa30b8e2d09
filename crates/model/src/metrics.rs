//! Current and historical metric queries.

use connect_sdk_json_mapper::{json_enum, json_record, OffsetDateTime};

json_enum! {
    pub enum Channel {
        Voice => "VOICE",
        Chat => "CHAT",
    }
}

json_enum! {
    pub enum Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
    }
}

json_enum! {
    pub enum Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

json_enum! {
    pub enum Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

json_enum! {
    pub enum Comparison {
        Lt => "LT",
    }
}

json_enum! {
    pub enum HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed => "CONTACTS_MISSED",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

json_enum! {
    pub enum CurrentMetricName {
        AgentsOnline => "AGENTS_ONLINE",
        AgentsAvailable => "AGENTS_AVAILABLE",
        AgentsOnCall => "AGENTS_ON_CALL",
        AgentsNonProductive => "AGENTS_NON_PRODUCTIVE",
        AgentsAfterContactWork => "AGENTS_AFTER_CONTACT_WORK",
        AgentsError => "AGENTS_ERROR",
        AgentsStaffed => "AGENTS_STAFFED",
        ContactsInQueue => "CONTACTS_IN_QUEUE",
        OldestContactAge => "OLDEST_CONTACT_AGE",
        ContactsScheduled => "CONTACTS_SCHEDULED",
    }
}

json_record! {
    pub struct QueueReference {
        id: String => "Id",
        arn: String => "Arn",
    }
}

json_record! {
    pub struct Dimensions {
        queue: QueueReference => "Queue",
        channel: Channel => "Channel",
    }
}

json_record! {
    pub struct Filters {
        queues: Vec<String> => "Queues",
        channels: Vec<Channel> => "Channels",
    }
}

json_record! {
    pub struct Threshold {
        comparison: Comparison => "Comparison",
        threshold_value: f64 => "ThresholdValue",
    }
}

json_record! {
    pub struct HistoricalMetric {
        name: HistoricalMetricName => "Name",
        threshold: Threshold => "Threshold",
        statistic: Statistic => "Statistic",
        unit: Unit => "Unit",
    }
}

json_record! {
    pub struct HistoricalMetricData {
        metric: HistoricalMetric => "Metric",
        value: f64 => "Value",
    }
}

json_record! {
    pub struct HistoricalMetricResult {
        dimensions: Dimensions => "Dimensions",
        collections: Vec<HistoricalMetricData> => "Collections",
    }
}

json_record! {
    pub struct GetMetricDataRequest {
        start_time: OffsetDateTime => "StartTime",
        end_time: OffsetDateTime => "EndTime",
        filters: Filters => "Filters",
        groupings: Vec<Grouping> => "Groupings",
        historical_metrics: Vec<HistoricalMetric> => "HistoricalMetrics",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

json_record! {
    pub struct GetMetricDataResponse {
        next_token: String => "NextToken",
        metric_results: Vec<HistoricalMetricResult> => "MetricResults",
    }
}

json_record! {
    pub struct CurrentMetric {
        name: CurrentMetricName => "Name",
        unit: Unit => "Unit",
    }
}

json_record! {
    pub struct CurrentMetricData {
        metric: CurrentMetric => "Metric",
        value: f64 => "Value",
    }
}

json_record! {
    pub struct CurrentMetricResult {
        dimensions: Dimensions => "Dimensions",
        collections: Vec<CurrentMetricData> => "Collections",
    }
}

json_record! {
    pub struct GetCurrentMetricDataRequest {
        filters: Filters => "Filters",
        groupings: Vec<Grouping> => "Groupings",
        current_metrics: Vec<CurrentMetric> => "CurrentMetrics",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

json_record! {
    pub struct GetCurrentMetricDataResponse {
        next_token: String => "NextToken",
        metric_results: Vec<CurrentMetricResult> => "MetricResults",
        data_snapshot_time: OffsetDateTime => "DataSnapshotTime",
    }
}

#[cfg(test)]
mod tests {
    use connect_sdk_json_mapper::{from_json_str, to_json_string};
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_get_metric_data_request() {
        let request = GetMetricDataRequest {
            start_time: Some(datetime!(2019-03-18 00:00 UTC)),
            end_time: Some(datetime!(2019-03-18 00:05 UTC)),
            filters: Some(Filters {
                queues: Some(vec!["q-1".to_owned()]),
                channels: Some(vec![Channel::Voice]),
            }),
            groupings: Some(vec![Grouping::Queue]),
            historical_metrics: Some(vec![HistoricalMetric {
                name: Some(HistoricalMetricName::ServiceLevel),
                threshold: Some(Threshold {
                    comparison: Some(Comparison::Lt),
                    threshold_value: Some(60.0),
                }),
                statistic: Some(Statistic::Avg),
                unit: Some(Unit::Percent),
            }]),
            ..Default::default()
        };
        assert_eq!(
            to_json_string(&request).unwrap(),
            concat!(
                r#"{"StartTime":1552867200,"EndTime":1552867500,"#,
                r#""Filters":{"Queues":["q-1"],"Channels":["VOICE"]},"Groupings":["QUEUE"],"#,
                r#""HistoricalMetrics":[{"Name":"SERVICE_LEVEL","Threshold":{"Comparison":"LT","ThresholdValue":60.0},"Statistic":"AVG","Unit":"PERCENT"}]}"#
            )
        );
    }

    #[test]
    fn test_get_current_metric_data_result() {
        let json = r#"{"MetricResults":[{"Dimensions":{"Queue":{"Id":"q-1"},"Channel":"VOICE"},"Collections":[{"Metric":{"Name":"AGENTS_ONLINE","Unit":"COUNT"},"Value":4.0}]}],"DataSnapshotTime":1552867200.123}"#;
        let result: GetCurrentMetricDataResponse = from_json_str(json).unwrap().unwrap();
        assert_eq!(
            result.data_snapshot_time,
            Some(datetime!(2019-03-18 00:00:00.123 UTC))
        );
        let first = &result.metric_results.as_ref().unwrap()[0];
        let data = &first.collections.as_ref().unwrap()[0];
        assert_eq!(data.value, Some(4.0));
        assert_eq!(
            data.metric.as_ref().and_then(|m| m.name.clone()),
            Some(CurrentMetricName::AgentsOnline)
        );
        assert_eq!(to_json_string(&result).unwrap(), json);
    }
}
