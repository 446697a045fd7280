use crate::core::config::Credentials;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{SignatureResult, Signer};
use base64::engine::general_purpose;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

pub const API_KEY_HEADER: &str = "API-Key";
pub const API_SIGN_HEADER: &str = "API-Sign";

/// Signs private requests with the account's API key pair
pub struct KrakenSigner {
    api_key: Secret<String>,
    secret: Zeroizing<Vec<u8>>,
}

impl std::fmt::Debug for KrakenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenSigner").finish_non_exhaustive()
    }
}

impl KrakenSigner {
    /// Decode the base64 secret up front so a bad secret fails before any I/O
    pub fn new(credentials: &Credentials) -> Result<Self, ExchangeError> {
        let secret = decode_secret(credentials.api_secret.expose_secret())?;
        Ok(Self {
            api_key: credentials.api_key.clone(),
            secret,
        })
    }

    pub fn sign(&self, path: &str, nonce: u64, body: &str) -> Result<String, ExchangeError> {
        sign_message(path, nonce, body, &self.secret)
    }
}

impl Signer for KrakenSigner {
    fn sign_request(&self, path: &str, nonce: u64, body: &str) -> SignatureResult {
        let signature = self.sign(path, nonce, body)?;
        Ok(vec![
            (
                API_KEY_HEADER.to_string(),
                self.api_key.expose_secret().clone(),
            ),
            (API_SIGN_HEADER.to_string(), signature),
        ])
    }
}

pub fn decode_secret(secret: &str) -> Result<Zeroizing<Vec<u8>>, ExchangeError> {
    Ok(Zeroizing::new(general_purpose::STANDARD.decode(secret)?))
}

/// `base64(HMAC-SHA512(secret, path || SHA256(nonce || body)))`
///
/// `body` must be the exact form encoding that is sent, nonce included.
pub fn sign_message(
    path: &str,
    nonce: u64,
    body: &str,
    secret: &[u8],
) -> Result<String, ExchangeError> {
    if nonce == 0 {
        return Err(ExchangeError::InvalidNonce(nonce));
    }

    let mut sha = Sha256::new();
    sha.update(nonce.to_string().as_bytes());
    sha.update(body.as_bytes());
    let digest = sha.finalize();

    // HMAC pads or hashes keys of any length, so construction cannot fail.
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(path.as_bytes());
    mac.update(&digest);

    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // Published example from the exchange's REST authentication guide
    const DOC_SECRET: &str =
        "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";
    const DOC_NONCE: u64 = 1_616_492_376_594;
    const DOC_BODY: &str =
        "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37500&type=buy&volume=1.25";
    const DOC_PATH: &str = "/0/private/AddOrder";
    const DOC_SIGNATURE: &str =
        "4/dpxb3iT4tp/ZCVEwSnEsLxx0bqyhLpdfOpc6fn7OR8+UClSV5n9E6aSS8MPtnRfp32bAb0nmbRn6H8ndwLUQ==";

    fn doc_secret() -> Zeroizing<Vec<u8>> {
        decode_secret(DOC_SECRET).unwrap()
    }

    #[test]
    fn test_documented_vector() {
        let signature = sign_message(DOC_PATH, DOC_NONCE, DOC_BODY, &doc_secret()).unwrap();
        assert_eq!(signature, DOC_SIGNATURE);
    }

    #[test]
    fn test_signer_headers() {
        let credentials = Credentials::new("my-api-key".to_string(), DOC_SECRET.to_string());
        let signer = KrakenSigner::new(&credentials).unwrap();
        let headers = signer.sign_request(DOC_PATH, DOC_NONCE, DOC_BODY).unwrap();

        assert_eq!(
            headers,
            vec![
                ("API-Key".to_string(), "my-api-key".to_string()),
                ("API-Sign".to_string(), DOC_SIGNATURE.to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_secret_encoding() {
        let credentials = Credentials::new("key".to_string(), "not base64!!".to_string());
        let err = KrakenSigner::new(&credentials).unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidSecret(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_zero_nonce_rejected() {
        assert!(matches!(
            sign_message(DOC_PATH, 0, "nonce=0", &doc_secret()),
            Err(ExchangeError::InvalidNonce(0))
        ));
    }

    #[rstest]
    #[case::empty(0)]
    #[case::short(1)]
    #[case::block_sized(128)]
    #[case::longer_than_block(4096)]
    fn test_any_key_length_signs(#[case] len: usize) {
        let secret = vec![0x5a; len];
        let signature = sign_message(DOC_PATH, DOC_NONCE, DOC_BODY, &secret).unwrap();
        assert_eq!(general_purpose::STANDARD.decode(signature).unwrap().len(), 64);
    }

    #[test]
    fn test_deterministic() {
        let a = sign_message(DOC_PATH, DOC_NONCE, DOC_BODY, &doc_secret()).unwrap();
        let b = sign_message(DOC_PATH, DOC_NONCE, DOC_BODY, &doc_secret()).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    #[case::path_case("/0/private/addorder", DOC_NONCE, DOC_BODY, DOC_SECRET)]
    #[case::trailing_slash("/0/private/AddOrder/", DOC_NONCE, DOC_BODY, DOC_SECRET)]
    #[case::nonce(DOC_PATH, DOC_NONCE + 1, DOC_BODY, DOC_SECRET)]
    #[case::param_value(
        DOC_PATH,
        DOC_NONCE,
        "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37501&type=buy&volume=1.25",
        DOC_SECRET
    )]
    #[case::secret(DOC_PATH, DOC_NONCE, DOC_BODY, "c2VjcmV0LWtleQ==")]
    fn test_any_input_change_alters_signature(
        #[case] path: &str,
        #[case] nonce: u64,
        #[case] body: &str,
        #[case] secret: &str,
    ) {
        let secret = decode_secret(secret).unwrap();
        let signature = sign_message(path, nonce, body, &secret).unwrap();
        assert_ne!(signature, DOC_SIGNATURE);
    }

    proptest! {
        #[test]
        fn prop_nonce_changes_signature(nonce in 1u64..u64::MAX - 1, body in "[a-z=&0-9]{0,32}") {
            let secret = doc_secret();
            let a = sign_message(DOC_PATH, nonce, &body, &secret).unwrap();
            let b = sign_message(DOC_PATH, nonce + 1, &body, &secret).unwrap();
            prop_assert_ne!(&a, &b);
            prop_assert_eq!(general_purpose::STANDARD.decode(&a).unwrap().len(), 64);
        }
    }
}
