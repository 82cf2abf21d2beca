use crate::error::{Error, Result};
use log::error;
use serde::{de::DeserializeOwned, Deserialize};

const OK: &str = "OK";

#[derive(Deserialize)]
struct Envelope<T> {
    status: String,
    result: Option<T>,
    comment: Option<String>,
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body).map_err(|e| {
        error!(target: "cforge::network", "Decoding error: {}", e);
        Error::from(e)
    })?;
    if envelope.status != OK {
        let message = envelope
            .comment
            .unwrap_or_else(|| String::from("Unknown API Error"));
        error!(target: "cforge::network", "API Error: {}", message);
        return Err(Error::Api(message));
    }
    envelope.result.ok_or(Error::NoData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_yields_result() {
        let v: Vec<u32> = decode(br#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn failed_envelope_carries_comment() {
        let err = decode::<Vec<u32>>(
            br#"{"status":"FAILED","comment":"contestId: Contest with id 100000 not found"}"#,
        )
        .unwrap_err();
        match err {
            Error::Api(message) => assert_eq!(message, "contestId: Contest with id 100000 not found"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn failed_envelope_without_comment() {
        let err = decode::<Vec<u32>>(br#"{"status":"FAILED"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m == "Unknown API Error"));
    }

    #[test]
    fn ok_envelope_without_result() {
        let err = decode::<Vec<u32>>(br#"{"status":"OK"}"#).unwrap_err();
        assert!(matches!(err, Error::NoData));
    }

    #[test]
    fn garbage_is_a_decoding_error() {
        let err = decode::<Vec<u32>>(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
        let err = decode::<Vec<u32>>(br#"{"status":"OK","result":"nope"}"#).unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }
}
