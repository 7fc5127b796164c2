use crate::{
    encoding,
    webauthn::{
        AuthenticatedPublicKeyCredential, AuthenticatorTransport, CredentialRequestOptions,
        PublicKeyCredentialDescriptor, PublicKeyCredentialHints, PublicKeyCredentialType,
        UserVerificationRequirement,
    },
    Bytes,
};

#[test]
fn lenient_request_options_deserialization() {
    let request = r#"{
            "publicKey": {
                "challenge": "ZEvMflZDcwQJmarInnYi88px-6HZcv2Uoxw7-_JOOTg",
                "timeout": "60000",
                "rpId": "example.com",
                "allowCredentials": [
                    {
                        "type": "public-key",
                        "id": "AQID",
                        "transports": ["usb", "carrier-pigeon", "cable"]
                    },
                    {
                        "type": "password",
                        "id": "BAUG"
                    }
                ],
                "userVerification": "sometimes",
                "hints": ["security-key", "unknown-hint"]
            }
        }"#;

    let options = serde_json::from_str::<CredentialRequestOptions>(request)
        .expect("Failed to deserialize")
        .public_key;

    assert_eq!(options.timeout, Some(60_000));
    assert_eq!(options.rp_id.as_deref(), Some("example.com"));
    assert_eq!(
        options.user_verification,
        UserVerificationRequirement::Preferred
    );
    assert_eq!(options.hints, Some(vec![PublicKeyCredentialHints::SecurityKey]));

    let allow_credentials = options.allow_credentials.expect("allow list is present");
    assert_eq!(allow_credentials.len(), 2);
    assert_eq!(allow_credentials[0].id, Bytes::from([1, 2, 3]));
    assert_eq!(
        allow_credentials[0].transports,
        Some(vec![AuthenticatorTransport::Usb, AuthenticatorTransport::Hybrid])
    );
    assert_eq!(allow_credentials[1].ty, PublicKeyCredentialType::Unknown);
}

#[test]
fn request_options_skip_absent_members() {
    let options = CredentialRequestOptions {
        public_key: crate::webauthn::PublicKeyCredentialRequestOptions {
            challenge: Bytes::from([0xfb, 0xff]),
            timeout: None,
            rp_id: Some("example.com".into()),
            allow_credentials: Some(vec![PublicKeyCredentialDescriptor::public_key([
                1u8, 2, 3,
            ])]),
            user_verification: UserVerificationRequirement::Required,
            hints: None,
        },
    };

    let json = serde_json::to_value(&options).expect("serializable");
    let public_key = json["publicKey"].as_object().expect("an object");

    assert!(!public_key.contains_key("timeout"));
    assert!(!public_key.contains_key("hints"));
    assert_eq!(public_key["rpId"], "example.com");
    assert_eq!(public_key["userVerification"], "required");
    assert_eq!(public_key["allowCredentials"][0]["type"], "public-key");
    assert!(public_key["allowCredentials"][0].get("transports").is_none());

    let round_trip: CredentialRequestOptions =
        serde_json::from_value(json).expect("deserializable");
    assert_eq!(round_trip, options);
}

#[test]
fn assertion_response_from_browser_json() {
    let client_data_json = br#"{"type":"webauthn.get","challenge":"AQID","origin":"https://example.com","crossOrigin":false}"#;
    let response = format!(
        r#"{{
            "id": "AAEC",
            "rawId": "AAEC",
            "type": "public-key",
            "authenticatorAttachment": "platform",
            "response": {{
                "clientDataJSON": "{}",
                "authenticatorData": "o3mm9u6vuaVeN4wRgDTidR5oL6ufLTCrE9ISVYbOGUcFAAAAAQ",
                "signature": "MEUCIQ",
                "userHandle": "dXNlcg"
            }}
        }}"#,
        encoding::base64url(client_data_json)
    );

    let credential = serde_json::from_str::<AuthenticatedPublicKeyCredential>(&response)
        .expect("Failed to deserialize");

    assert_eq!(credential.raw_id, Bytes::from([0, 1, 2]));
    assert_eq!(credential.ty, PublicKeyCredentialType::PublicKey);
    assert_eq!(
        credential.response.client_data_json.as_slice(),
        client_data_json.as_slice()
    );
    assert_eq!(credential.response.authenticator_data.len(), 37);
    assert_eq!(
        credential.response.user_handle,
        Some(Bytes::from(b"user".as_slice()))
    );
}

#[test]
fn assertion_response_without_user_handle() {
    let response = r#"{
            "clientDataJSON": "e30",
            "authenticatorData": "AA",
            "signature": "AA",
            "userHandle": null
        }"#;

    let response =
        serde_json::from_str::<crate::webauthn::AuthenticatorAssertionResponse>(response)
            .expect("Failed to deserialize");

    assert_eq!(response.user_handle, None);
    assert_eq!(response.client_data_json.as_slice(), b"{}");
}
