/*
 * Responsibility
 * - GET /api/v1/agent の response DTO
 */
use serde::Serialize;

use crate::agent::{AgentField, AgentHeaders, AgentSession};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatusResponse {
    // mount 前なら null
    pub headers: Option<AgentHeaders>,
    pub is_authorized: bool,
    pub missing: Vec<&'static str>,
}

impl AgentStatusResponse {
    pub fn from_session(session: &AgentSession) -> Self {
        let headers = session.headers().cloned();
        let missing = match &headers {
            Some(h) => h.missing().into_iter().map(AgentField::meta_name).collect(),
            None => AgentField::ALL.into_iter().map(AgentField::meta_name).collect(),
        };

        Self {
            headers,
            is_authorized: session.is_authorized(),
            missing,
        }
    }
}
