//! The save-link issuer: claims assembly, RS256 signing, URL rendering.

use jsonwebtoken::{Algorithm, Header};
use serde::Serialize;
use serde_json::Value;

use crate::credential::SigningCredential;
use crate::error::SigningError;

/// Base of the provider's save URL; the signed token is the trailing
/// path segment.
pub const SAVE_LINK_BASE: &str = "https://pay.google.com/gp/v/save";

const DEFAULT_ORIGIN: &str = "https://google.com";

/// Claims of a save-to-wallet token. Only ever serialized — the service
/// issues these tokens, the provider verifies them.
#[derive(Serialize)]
struct SaveClaims<'a> {
    iss: &'a str,
    aud: &'a str,
    origins: &'a [String],
    typ: &'a str,
    payload: &'a Value,
}

/// Signs save-to-wallet tokens for exactly one tenant.
///
/// Holds the tenant's credential and allowed origins; shared read-only
/// across all concurrent requests for that tenant.
#[derive(Debug)]
pub struct SaveLinkIssuer {
    credential: SigningCredential,
    origins: Vec<String>,
}

impl SaveLinkIssuer {
    /// Build an issuer from a tenant credential and the tenant's
    /// allowed origins. An empty origin list falls back to the provider
    /// default.
    pub fn new(credential: SigningCredential, origins: Vec<String>) -> Self {
        let origins = if origins.is_empty() {
            vec![DEFAULT_ORIGIN.to_string()]
        } else {
            origins
        };
        Self { credential, origins }
    }

    /// Sign a save link embedding the given `payload` claim.
    ///
    /// The payload is the resource-kind map built by the pass kind
    /// (full resources or id-only stubs); this function adds the
    /// envelope claims, signs with the tenant's key, and renders the
    /// save URL.
    pub fn issue(&self, payload: &Value) -> Result<String, SigningError> {
        let claims = SaveClaims {
            iss: self.credential.issuer_subject_id(),
            aud: "google",
            origins: &self.origins,
            typ: "savetowallet",
            payload,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.credential.key_id().to_string());

        let token = jsonwebtoken::encode(&header, &claims, self.credential.encoding_key())?;
        tracing::debug!(kid = %self.credential.key_id(), "issued save-to-wallet token");
        Ok(format!("{SAVE_LINK_BASE}/{token}"))
    }

    /// The key id this issuer signs with.
    pub fn key_id(&self) -> &str {
        self.credential.key_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
    use serde::Deserialize;
    use serde_json::json;

    const TEST_RSA_PEM: &str = include_str!("../testdata/test_rsa.pem");
    const TEST_RSA_PUB_PEM: &str = include_str!("../testdata/test_rsa_pub.pem");

    #[derive(Debug, Deserialize)]
    struct DecodedClaims {
        iss: String,
        aud: String,
        origins: Vec<String>,
        typ: String,
        payload: Value,
    }

    fn issuer_for(subject: &str, kid: &str, origins: Vec<String>) -> SaveLinkIssuer {
        let credential = SigningCredential::from_parts(subject, kid, TEST_RSA_PEM).unwrap();
        SaveLinkIssuer::new(credential, origins)
    }

    fn decode_claims(token: &str) -> DecodedClaims {
        let key = DecodingKey::from_rsa_pem(TEST_RSA_PUB_PEM.as_bytes()).unwrap();
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&["google"]);
        validation.validate_exp = false;
        validation.set_required_spec_claims::<&str>(&[]);
        decode::<DecodedClaims>(token, &key, &validation)
            .unwrap()
            .claims
    }

    fn token_of(url: &str) -> &str {
        url.rsplit('/').next().unwrap()
    }

    #[test]
    fn save_link_starts_with_provider_base() {
        let issuer = issuer_for("wallet@a.iam.gserviceaccount.com", "kid-a", vec![]);
        let url = issuer
            .issue(&json!({"flightObjects": [{"id": "I.OBJ1"}]}))
            .unwrap();
        assert!(url.starts_with("https://pay.google.com/gp/v/save/"));
    }

    #[test]
    fn claims_carry_envelope_and_payload() {
        let issuer = issuer_for(
            "wallet@a.iam.gserviceaccount.com",
            "kid-a",
            vec!["https://booking.example.com".to_string()],
        );
        let payload = json!({
            "flightClasses": [{"id": "I.CLS1"}],
            "flightObjects": [{"id": "I.OBJ1"}],
        });
        let url = issuer.issue(&payload).unwrap();
        let claims = decode_claims(token_of(&url));

        assert_eq!(claims.iss, "wallet@a.iam.gserviceaccount.com");
        assert_eq!(claims.aud, "google");
        assert_eq!(claims.typ, "savetowallet");
        assert_eq!(claims.origins, vec!["https://booking.example.com"]);
        assert_eq!(claims.payload["flightClasses"][0]["id"], "I.CLS1");
        assert_eq!(claims.payload["flightObjects"][0]["id"], "I.OBJ1");
    }

    #[test]
    fn object_only_payload_has_no_class_key() {
        let issuer = issuer_for("wallet@a.iam.gserviceaccount.com", "kid-a", vec![]);
        let url = issuer
            .issue(&json!({"flightObjects": [{"id": "I.OBJ1"}]}))
            .unwrap();
        let claims = decode_claims(token_of(&url));
        assert!(claims.payload.get("flightClasses").is_none());
        assert_eq!(
            claims.payload["flightObjects"].as_array().unwrap().len(),
            1
        );
    }

    #[test]
    fn empty_origins_fall_back_to_default() {
        let issuer = issuer_for("wallet@a.iam.gserviceaccount.com", "kid-a", vec![]);
        let url = issuer.issue(&json!({"flightObjects": []})).unwrap();
        let claims = decode_claims(token_of(&url));
        assert_eq!(claims.origins, vec!["https://google.com"]);
    }

    #[test]
    fn header_carries_rs256_and_tenant_kid() {
        let issuer = issuer_for("wallet@a.iam.gserviceaccount.com", "kid-a", vec![]);
        let url = issuer.issue(&json!({"flightObjects": []})).unwrap();
        let header = decode_header(token_of(&url)).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("kid-a"));
    }

    #[test]
    fn interleaved_tenants_never_swap_key_ids() {
        // Two tenants signing concurrently; every token must carry the
        // key id of the issuer that produced it.
        let issuer_a = std::sync::Arc::new(issuer_for(
            "wallet@a.iam.gserviceaccount.com",
            "kid-a",
            vec![],
        ));
        let issuer_b = std::sync::Arc::new(issuer_for(
            "wallet@b.iam.gserviceaccount.com",
            "kid-b",
            vec![],
        ));

        let mut handles = Vec::new();
        for round in 0..4 {
            for (issuer, kid, subject) in [
                (issuer_a.clone(), "kid-a", "wallet@a.iam.gserviceaccount.com"),
                (issuer_b.clone(), "kid-b", "wallet@b.iam.gserviceaccount.com"),
            ] {
                handles.push(std::thread::spawn(move || {
                    for i in 0..8 {
                        let payload =
                            json!({"flightObjects": [{"id": format!("I.OBJ{round}-{i}")}]});
                        let url = issuer.issue(&payload).unwrap();
                        let token = url.rsplit('/').next().unwrap().to_string();
                        let header = decode_header(&token).unwrap();
                        assert_eq!(header.kid.as_deref(), Some(kid));
                        let key =
                            DecodingKey::from_rsa_pem(TEST_RSA_PUB_PEM.as_bytes()).unwrap();
                        let mut validation = Validation::new(Algorithm::RS256);
                        validation.set_audience(&["google"]);
                        validation.validate_exp = false;
                        validation.set_required_spec_claims::<&str>(&[]);
                        let claims = decode::<DecodedClaims>(&token, &key, &validation)
                            .unwrap()
                            .claims;
                        assert_eq!(claims.iss, subject);
                    }
                }));
            }
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
