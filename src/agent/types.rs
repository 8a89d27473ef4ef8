/*
 * Responsibility
 * - agent-* の 4 フィールドを表す型 (AgentHeaders / AgentField)
 * - 「存在するか (non-empty)」の判定だけを持つ。署名や証明書の検証はしない
 */
use serde::Serialize;

/// 上流プロキシが付与する 4 つの値
///
/// 各フィールドは独立に Some / None になる（フィールド間の整合チェックはしない）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentHeaders {
    pub agent_cert: Option<String>,
    pub agent_signature: Option<String>,
    pub agent_timestamp: Option<String>,
    pub agent_id: Option<String>,
}

impl AgentHeaders {
    pub fn get(&self, field: AgentField) -> Option<&str> {
        match field {
            AgentField::Cert => self.agent_cert.as_deref(),
            AgentField::Signature => self.agent_signature.as_deref(),
            AgentField::Timestamp => self.agent_timestamp.as_deref(),
            AgentField::Id => self.agent_id.as_deref(),
        }
    }

    pub fn set(&mut self, field: AgentField, value: Option<String>) {
        let slot = match field {
            AgentField::Cert => &mut self.agent_cert,
            AgentField::Signature => &mut self.agent_signature,
            AgentField::Timestamp => &mut self.agent_timestamp,
            AgentField::Id => &mut self.agent_id,
        };
        *slot = value;
    }

    /// 値があり、かつ空文字でないか
    pub fn is_present(&self, field: AgentField) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// present でないフィールド (AgentField::ALL の順)
    pub fn missing(&self) -> Vec<AgentField> {
        AgentField::ALL
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentField {
    Cert,
    Signature,
    Timestamp,
    Id,
}

impl AgentField {
    pub const ALL: [AgentField; 4] = [
        AgentField::Cert,
        AgentField::Signature,
        AgentField::Timestamp,
        AgentField::Id,
    ];

    /// `<meta name="...">` / HTTP header 名
    pub fn meta_name(self) -> &'static str {
        match self {
            AgentField::Cert => "agent-cert",
            AgentField::Signature => "agent-signature",
            AgentField::Timestamp => "agent-timestamp",
            AgentField::Id => "agent-id",
        }
    }

    /// JSON 上のキー名
    pub fn key(self) -> &'static str {
        match self {
            AgentField::Cert => "agentCert",
            AgentField::Signature => "agentSignature",
            AgentField::Timestamp => "agentTimestamp",
            AgentField::Id => "agentId",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_not_present() {
        let headers = AgentHeaders {
            agent_cert: Some(String::new()),
            agent_signature: Some("s".into()),
            ..Default::default()
        };

        assert!(!headers.is_present(AgentField::Cert));
        assert!(headers.is_present(AgentField::Signature));
        assert_eq!(
            headers.missing(),
            vec![AgentField::Cert, AgentField::Timestamp, AgentField::Id]
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let headers = AgentHeaders {
            agent_id: Some("12309".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&headers).unwrap();

        assert_eq!(json["agentId"], "12309");
        assert!(json["agentCert"].is_null());
        for field in AgentField::ALL {
            assert!(json.get(field.key()).is_some());
        }
    }
}
