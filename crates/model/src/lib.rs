//! Records, enums and exceptions of the contact-center API.
//!
//! Every type here is declared through the generation macros of
//! `connect-sdk-json-mapper`, so each record carries its field table
//! ([`Record::SCHEMA`]) and JSON adapters. Request records hold the JSON
//! body only; members sent in the URI or query string are not fields.
//!
//! ```
//! use connect_sdk_json_mapper::{from_json_str, to_json_string};
//! use connect_sdk_model::QueueReference;
//!
//! let queue: QueueReference = from_json_str(r#"{"Id":"q-1","Extra":true}"#)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(to_json_string(&queue).unwrap(), r#"{"Id":"q-1"}"#);
//! ```

mod contact;
mod contact_flow;
mod errors;
mod metrics;
mod routing;
mod tagging;
mod user;

pub use connect_sdk_json_mapper::{Record, RecordSchema};

pub use contact::*;
pub use contact_flow::*;
pub use errors::*;
pub use metrics::*;
pub use routing::*;
pub use tagging::*;
pub use user::*;

/// Field tables of every record in this crate.
pub const RECORD_SCHEMAS: &[RecordSchema] = &[
    ContactFlowSummary::SCHEMA,
    ListContactFlowsRequest::SCHEMA,
    ListContactFlowsResponse::SCHEMA,
    UserIdentityInfo::SCHEMA,
    UserPhoneConfig::SCHEMA,
    User::SCHEMA,
    UserSummary::SCHEMA,
    CreateUserRequest::SCHEMA,
    CreateUserResponse::SCHEMA,
    DescribeUserResponse::SCHEMA,
    ListUsersResponse::SCHEMA,
    UpdateUserPhoneConfigRequest::SCHEMA,
    QueueSummary::SCHEMA,
    ListQueuesRequest::SCHEMA,
    ListQueuesResponse::SCHEMA,
    HoursOfOperationSummary::SCHEMA,
    ListHoursOfOperationsResponse::SCHEMA,
    RoutingProfileSummary::SCHEMA,
    ListRoutingProfilesResponse::SCHEMA,
    QueueReference::SCHEMA,
    Dimensions::SCHEMA,
    Filters::SCHEMA,
    Threshold::SCHEMA,
    HistoricalMetric::SCHEMA,
    HistoricalMetricData::SCHEMA,
    HistoricalMetricResult::SCHEMA,
    GetMetricDataRequest::SCHEMA,
    GetMetricDataResponse::SCHEMA,
    CurrentMetric::SCHEMA,
    CurrentMetricData::SCHEMA,
    CurrentMetricResult::SCHEMA,
    GetCurrentMetricDataRequest::SCHEMA,
    GetCurrentMetricDataResponse::SCHEMA,
    GetContactAttributesResponse::SCHEMA,
    UpdateContactAttributesRequest::SCHEMA,
    StartOutboundVoiceContactRequest::SCHEMA,
    StartOutboundVoiceContactResponse::SCHEMA,
    StopContactRequest::SCHEMA,
    Credentials::SCHEMA,
    GetFederationTokenResponse::SCHEMA,
    TagResourceRequest::SCHEMA,
    UntagResourceRequest::SCHEMA,
    ListTagsForResourceRequest::SCHEMA,
    ListTagsForResourceResponse::SCHEMA,
    ProblemDetail::SCHEMA,
];
