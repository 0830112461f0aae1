// Request/response models for the Bravia system info API.
//
// The device answers with a JSON-RPC-style envelope whose `result`
// array has a method-specific shape. The positional `result[0]` /
// `result[1]` destructuring is confined to this module: callers get
// named structs or a decode error, never an out-of-range access.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// JSON-RPC-style request body for `POST /sony/system`.
#[derive(Debug, Serialize)]
pub struct InfoRequest {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u32,
    pub version: String,
}

impl InfoRequest {
    /// The fixed envelope the TV expects: empty params, id 1, version 1.0.
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: Vec::new(),
            id: 1,
            version: "1.0".to_string(),
        }
    }
}

/// Response envelope: exactly one of `result` / `error` is present.
#[derive(Debug, Deserialize)]
pub struct InfoEnvelope {
    pub result: Option<Value>,
    pub error: Option<Value>,
}

impl InfoEnvelope {
    /// Unwrap the `result` payload, turning a device-side error or a
    /// missing result into `Error::UnexpectedShape`.
    pub fn into_result(self) -> Result<Value, Error> {
        if let Some(error) = self.error {
            return Err(Error::UnexpectedShape {
                message: format!("device reported error: {error}"),
            });
        }
        self.result.ok_or_else(|| Error::UnexpectedShape {
            message: "response contained no result".to_string(),
        })
    }
}

/// Decoded `getSystemInformation` payload.
///
/// `result[0]` is a flat attribute map; the attributes are kept in the
/// order the device sent them, and the required `model` attribute is
/// extracted for use as the console's prompt label.
#[derive(Debug, Clone)]
pub struct SystemInformation {
    pub model: String,
    pub attributes: IndexMap<String, String>,
}

impl SystemInformation {
    /// Decode from the raw `result` array of `getSystemInformation`.
    pub fn from_result(result: &Value) -> Result<Self, Error> {
        let first = result
            .get(0)
            .and_then(Value::as_object)
            .ok_or_else(|| Error::UnexpectedShape {
                message: "result[0] is not an attribute map".to_string(),
            })?;

        let mut attributes = IndexMap::with_capacity(first.len());
        for (key, value) in first {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            attributes.insert(key.clone(), rendered);
        }

        let model = attributes
            .get("model")
            .cloned()
            .ok_or_else(|| Error::UnexpectedShape {
                message: "system information has no model attribute".to_string(),
            })?;

        Ok(Self { model, attributes })
    }
}

/// One remote-control command descriptor from `getRemoteControllerInfo`.
///
/// `name` is the human-facing command name; `value` is the opaque IRCC
/// code dispatched through the control API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteCommand {
    pub name: String,
    pub value: String,
}

impl RemoteCommand {
    /// Decode the command list from the raw `result` array of
    /// `getRemoteControllerInfo` (`result[1]` is the descriptor list;
    /// `result[0]` holds bank metadata the console does not use).
    pub fn list_from_result(result: &Value) -> Result<Vec<Self>, Error> {
        let second = result.get(1).ok_or_else(|| Error::UnexpectedShape {
            message: "result[1] is missing".to_string(),
        })?;
        serde_json::from_value(second.clone()).map_err(|e| Error::UnexpectedShape {
            message: format!("result[1] is not a command list: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn info_request_envelope() {
        let body = serde_json::to_value(InfoRequest::new("getSystemInformation"))
            .expect("serializable");
        assert_eq!(
            body,
            json!({
                "method": "getSystemInformation",
                "params": [],
                "id": 1,
                "version": "1.0",
            })
        );
    }

    #[test]
    fn system_information_keeps_received_order_and_model() {
        let result = json!([{
            "product": "TV",
            "model": "KDL-50W800B",
            "serial": "1234567",
        }]);
        let info = SystemInformation::from_result(&result).expect("decodes");
        assert_eq!(info.model, "KDL-50W800B");
        let keys: Vec<&String> = info.attributes.keys().collect();
        assert_eq!(keys, ["product", "model", "serial"]);
    }

    #[test]
    fn system_information_without_model_is_a_decode_failure() {
        let result = json!([{ "product": "TV" }]);
        let err = SystemInformation::from_result(&result).expect_err("must fail");
        assert!(matches!(err, Error::UnexpectedShape { .. }));
    }

    #[test]
    fn system_information_rejects_non_map_first_element() {
        let err = SystemInformation::from_result(&json!(["nope"])).expect_err("must fail");
        assert!(matches!(err, Error::UnexpectedShape { .. }));
    }

    #[test]
    fn remote_commands_come_from_second_result_element() {
        let result = json!([
            { "bank": 0 },
            [
                { "name": "Power", "value": "AAAAAQAAAAEAAAAVAw==" },
                { "name": "Mute", "value": "AAAAAQAAAAEAAAAUAw==" },
            ]
        ]);
        let commands = RemoteCommand::list_from_result(&result).expect("decodes");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].name, "Power");
        assert_eq!(commands[1].value, "AAAAAQAAAAEAAAAUAw==");
    }

    #[test]
    fn remote_commands_missing_list_is_a_decode_failure() {
        let err = RemoteCommand::list_from_result(&json!([{ "bank": 0 }]))
            .expect_err("must fail");
        assert!(matches!(err, Error::UnexpectedShape { .. }));
    }

    #[test]
    fn device_error_envelope_surfaces_as_unexpected_shape() {
        let envelope: InfoEnvelope =
            serde_json::from_value(json!({ "error": [7, "Illegal State"], "id": 1 }))
                .expect("parses");
        let err = envelope.into_result().expect_err("must fail");
        assert!(matches!(err, Error::UnexpectedShape { .. }));
    }
}
