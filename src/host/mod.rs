//! Host-facing plugin contract
//!
//! A GraphQL server fires lifecycle events while it processes a request.
//! Plugins hand the server a listener per request; the server dispatches
//! each event to that listener with a read-only snapshot of the request.

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dispatch;

pub use dispatch::{dispatch, run_request};

/// Operation name the server uses for schema introspection
pub const INTROSPECTION_QUERY: &str = "IntrospectionQuery";

/// Request lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleEvent {
    DidResolveSource,
    ParsingDidStart,
    ValidationDidStart,
    DidResolveOperation,
    ResponseForOperation,
    ExecutionDidStart,
    DidEncounterErrors,
    WillSendResponse,
    DidEncounterSubsequentErrors,
    WillSendSubsequentPayload,
}

impl LifecycleEvent {
    /// Every event, in the order a server fires them
    pub const ALL: [LifecycleEvent; 10] = [
        LifecycleEvent::DidResolveSource,
        LifecycleEvent::ParsingDidStart,
        LifecycleEvent::ValidationDidStart,
        LifecycleEvent::DidResolveOperation,
        LifecycleEvent::ResponseForOperation,
        LifecycleEvent::ExecutionDidStart,
        LifecycleEvent::DidEncounterErrors,
        LifecycleEvent::WillSendResponse,
        LifecycleEvent::DidEncounterSubsequentErrors,
        LifecycleEvent::WillSendSubsequentPayload,
    ];

    /// Parse an event name, ignoring case, dashes and underscores
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "didresolvesource" => Some(Self::DidResolveSource),
            "parsingdidstart" => Some(Self::ParsingDidStart),
            "validationdidstart" => Some(Self::ValidationDidStart),
            "didresolveoperation" => Some(Self::DidResolveOperation),
            "responseforoperation" => Some(Self::ResponseForOperation),
            "executiondidstart" => Some(Self::ExecutionDidStart),
            "didencountererrors" => Some(Self::DidEncounterErrors),
            "willsendresponse" => Some(Self::WillSendResponse),
            "didencountersubsequenterrors" => Some(Self::DidEncounterSubsequentErrors),
            "willsendsubsequentpayload" => Some(Self::WillSendSubsequentPayload),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::DidResolveSource => "didResolveSource",
            LifecycleEvent::ParsingDidStart => "parsingDidStart",
            LifecycleEvent::ValidationDidStart => "validationDidStart",
            LifecycleEvent::DidResolveOperation => "didResolveOperation",
            LifecycleEvent::ResponseForOperation => "responseForOperation",
            LifecycleEvent::ExecutionDidStart => "executionDidStart",
            LifecycleEvent::DidEncounterErrors => "didEncounterErrors",
            LifecycleEvent::WillSendResponse => "willSendResponse",
            LifecycleEvent::DidEncounterSubsequentErrors => "didEncounterSubsequentErrors",
            LifecycleEvent::WillSendSubsequentPayload => "willSendSubsequentPayload",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GraphQL operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operation the server selected from the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolvedOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "operation", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OperationType>,
}

/// Read-only view of a request, owned by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestSnapshot {
    /// Operation name as sent by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Operation resolved from the parsed document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<ResolvedOperation>,
    /// Error messages collected so far, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl RequestSnapshot {
    /// Snapshot of a resolved operation with no errors
    pub fn resolved(name: impl Into<String>, kind: OperationType) -> Self {
        let name = name.into();
        Self {
            operation_name: Some(name.clone()),
            operation: Some(ResolvedOperation {
                name: Some(name),
                kind: Some(kind),
            }),
            errors: Vec::new(),
        }
    }

    pub fn with_errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(errors.into_iter().map(Into::into));
        self
    }

    /// Name of the resolved operation, if any
    pub fn resolved_name(&self) -> Option<&str> {
        self.operation.as_ref().and_then(|op| op.name.as_deref())
    }

    pub fn operation_type(&self) -> Option<OperationType> {
        self.operation.as_ref().and_then(|op| op.kind)
    }

    pub fn is_introspection(&self) -> bool {
        self.operation_name.as_deref() == Some(INTROSPECTION_QUERY)
    }
}

/// Per-request listener handed back to the server
///
/// Listeners advertise the events they care about; the server skips the rest.
pub trait RequestListener: Send + Sync {
    fn handles(&self, event: LifecycleEvent) -> bool;
    fn handle(&self, event: LifecycleEvent, ctx: &RequestSnapshot) -> Result<()>;
}

/// A server plugin
pub trait ServerPlugin: Send + Sync {
    /// Called once at the start of every request
    fn request_did_start(&self, ctx: &RequestSnapshot) -> Box<dyn RequestListener>;
}
