// src/api/types.rs
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};

/// One certificate issuance observed by Cert Spotter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuance {
    /// Server-assigned, strictly increasing. Sent as a string on the wire.
    #[serde(with = "id_string")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tbs_sha256: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dns_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pubkey_sha256: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: Issuer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub not_before: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub not_after: String,
    /// Deprecated: prefer `cert_der` and `cert_sha256`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<Certificate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cert_der: String, // base64-encoded DER certificate
    #[serde(default, deserialize_with = "null_as_default")]
    pub cert_sha256: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problem_reporting: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revoked: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revocation: Revocation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pubkey: PubKey,
}

impl Issuance {
    /// Decode the base64 `cert_der` field into raw DER bytes
    pub fn cert_der_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.cert_der.as_bytes())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pubkey_sha256: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub friendly_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caa_domains: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator: Operator,
}

/// Organization operating an issuer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
}

/// Legacy embedded certificate object, still populated by some responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub cert_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha256: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,
}

/// Revocation status. `time` and `reason` stay `None` unless the certificate is revoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revocation {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub reason: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked_at: String,
}

/// Public key descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub key_type: String,
    /// RSA-like keys only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_length: Option<u32>,
    /// EC-like keys only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

/// Treat an explicit JSON `null` like a missing key and fall back to the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Highest issuance id in a batch, to be passed as `position` on the next request.
/// Returns `None` for an empty batch so the caller keeps its previous cursor.
pub fn next_position(issuances: &[Issuance]) -> Option<u64> {
    issuances.iter().map(|i| i.id).max()
}

mod id_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A single sslmate.com issuance as returned by the live API
    pub const SSLMATE_ISSUANCE: &str = r#"{
        "id":"4326219514",
        "tbs_sha256":"db7c55f74732269c45fda91264003b2a25adc7ff2df687252f60772850449926",
        "cert_sha256":"20cbc0d1e87ed1d71d3b84533667ef60f22fffee634108711376dec87a38d4e2",
        "dns_names":["certs.sandbox.sslmate.com","certs.sslmate.com","sandbox.sslmate.com","sslmate.com","www.sslmate.com"],
        "pubkey_sha256":"1b1cebcd061ba39746a477db7b90d6871d648bd293ef50e053a6c54c5c3ac112",
        "pubkey":{"type":"rsa","bit_length":2048},
        "issuer":{
            "friendly_name":"Sectigo",
            "website":"https://sectigo.com/",
            "caa_domains":["sectigo.com","comodo.com","comodoca.com","usertrust.com","trust-provider.com"],
            "operator":{"name":"Sectigo","website":"https://sectigo.com/"},
            "pubkey_sha256":"e1ae9c3de848ece1ba72e0d991ae4d0d9ec547c6bad1dddab9d6beb0a7e0e0d8",
            "name":"C=GB, ST=Greater Manchester, L=Salford, O=Sectigo Limited, CN=Sectigo RSA Domain Validation Secure Server CA"
        },
        "not_before":"2022-10-22T00:00:00Z",
        "not_after":"2023-11-21T23:59:59Z",
        "revoked":false,
        "revocation":{"time":null,"reason":null,"checked_at":"2022-12-19T18:47:39Z"},
        "problem_reporting":"To report abuse, email sslabuse[at]sectigo[dot]com",
        "cert_der":"MIIGdDCCBVygAwIBAgIRAMFw"
    }"#;
}
