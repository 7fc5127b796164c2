use ciborium::cbor;

use super::*;

// "example.com" hashed with SHA-256
const EXAMPLE_RP_ID_HASH: [u8; 32] = [
    0xa3, 0x79, 0xa6, 0xf6, 0xee, 0xaf, 0xb9, 0xa5, 0x5e, 0x37, 0x8c, 0x11, 0x80, 0x34, 0xe2, 0x75,
    0x1e, 0x68, 0x2f, 0xab, 0x9f, 0x2d, 0x30, 0xab, 0x13, 0xd2, 0x12, 0x55, 0x86, 0xce, 0x19, 0x47,
];

#[test]
fn rp_id_is_hashed() {
    let auth_data = AuthenticatorData::new("example.com", 0);
    assert_eq!(auth_data.rp_id_hash(), &EXAMPLE_RP_ID_HASH);
}

#[test]
fn deserialize_assertion_authenticator_data() {
    let data: Vec<u8> = EXAMPLE_RP_ID_HASH
        .into_iter()
        .chain([0x05, 0x00, 0x00, 0x01, 0x2c])
        .collect();

    let auth_data =
        AuthenticatorData::from_slice(&data).expect("could not parse the authenticator data");

    assert_eq!(auth_data.rp_id_hash(), &EXAMPLE_RP_ID_HASH);
    assert_eq!(auth_data.flags, Flags::UP | Flags::UV);
    assert!(auth_data.flags.user_present());
    assert!(auth_data.flags.user_verified());
    assert_eq!(auth_data.counter, 300);
    assert_eq!(auth_data.extensions, None);
    assert_eq!(auth_data.to_vec(), data);
}

#[test]
fn deserialize_authenticator_data_with_extensions() {
    let expected = AuthenticatorData {
        extensions: Some(cbor!({ "credProtect" => 2 }).unwrap()),
        ..AuthenticatorData::new("example.com", 1).set_flags(Flags::UP)
    };
    let data = expected.to_vec();

    let auth_data =
        AuthenticatorData::from_slice(&data).expect("could not parse the authenticator data");

    assert_eq!(auth_data.flags, Flags::UP | Flags::ED);
    assert_eq!(auth_data.extensions, expected.extensions);
}

#[test]
fn reserved_flag_bits_are_retained() {
    let data: Vec<u8> = EXAMPLE_RP_ID_HASH
        .into_iter()
        .chain([0b0010_0011, 0, 0, 0, 0])
        .collect();

    let auth_data =
        AuthenticatorData::from_slice(&data).expect("could not parse the authenticator data");

    assert!(auth_data.flags.user_present());
    assert!(!auth_data.flags.user_verified());
    assert_eq!(u8::from(auth_data.flags), 0b0010_0011);
}

#[test]
fn too_short_data_is_rejected() {
    let result = AuthenticatorData::from_slice(&EXAMPLE_RP_ID_HASH);
    assert_eq!(result, Err(AuthenticatorDataError::TooShort(32)));
}

#[test]
fn attested_credential_data_is_rejected() {
    let data: Vec<u8> = EXAMPLE_RP_ID_HASH
        .into_iter()
        .chain([0x45, 0, 0, 0, 1])
        .chain([0; 18])
        .collect();

    let result = AuthenticatorData::from_slice(&data);
    assert_eq!(
        result,
        Err(AuthenticatorDataError::UnexpectedAttestedCredentialData)
    );
}

#[test]
fn trailing_bytes_are_rejected() {
    let data: Vec<u8> = EXAMPLE_RP_ID_HASH
        .into_iter()
        .chain([0x01, 0, 0, 0, 1, 0xff])
        .collect();

    let result = AuthenticatorData::from_slice(&data);
    assert_eq!(result, Err(AuthenticatorDataError::TrailingData(1)));
}

#[test]
fn extensions_must_be_a_map() {
    let mut data: Vec<u8> = EXAMPLE_RP_ID_HASH
        .into_iter()
        .chain([0x81, 0, 0, 0, 1])
        .collect();
    ciborium::ser::into_writer(&cbor!([1, 2]).unwrap(), &mut data).unwrap();

    let result = AuthenticatorData::from_slice(&data);
    assert!(matches!(
        result,
        Err(AuthenticatorDataError::InvalidExtensions(_))
    ));
}
