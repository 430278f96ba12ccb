// Payload splitter / extractor suite.
//
// Covers:
// * stripping a container down to header + terminator + payload
// * payload magic verification
// * structural errors surfacing through extraction
// * attaching a payload to a cover
// * the JSON shape handed to collaborators

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use proptest::prelude::*;

    use blueprint_core::chunk::ChunkType;
    use blueprint_core::constants::{BLUEPRINT_MAGIC, CONTAINER_SIGNATURE, TERMINATOR_CHUNK};
    use blueprint_core::container::{validate, ContainerBuilder, ContainerLimits, ImageHeader, StructureError};
    use blueprint_core::payload::{
        attach_payload, extract, extract_with_limits, split, verify_payload_signature, PayloadError,
    };

    fn cover(data_len: usize) -> Vec<u8> {
        let mut b = ContainerBuilder::new(ImageHeader::minimal(128, 128));
        b.push(ChunkType::DATA, &vec![0x5A; data_len]).unwrap();
        b.finish()
    }

    fn blueprint(body_len: usize) -> Vec<u8> {
        let mut p = BLUEPRINT_MAGIC.to_vec();
        p.extend_from_slice(&vec![0x42; body_len]);
        p
    }

    /// Signature, header, 50 KiB of pixel data, terminator, magic and 200 payload bytes.
    fn scenario_a() -> Vec<u8> {
        let mut buf = cover(50 * 1024);
        buf.extend_from_slice(&blueprint(200));
        buf
    }

// # ✅ 1. Strip

    #[test]
    fn large_cover_strips_above_ninety_percent() {
        let buf = scenario_a();
        let out = extract(&buf).unwrap();

        assert_eq!(out.original_size, buf.len());
        assert_eq!(out.stripped_size, 8 + 25 + 12 + 17 + 200);
        assert_eq!(out.stripped_payload.len(), out.stripped_size);
        assert!(out.compression_ratio_percent > 90.0);
        assert_eq!(out.saved_bytes(), buf.len() - 262);
    }

    #[test]
    fn large_cover_with_small_payload_at_least_halves() {
        let mut buf = cover(100 * 1024);
        buf.extend_from_slice(&blueprint(1000 - 17));

        let out = extract(&buf).unwrap();
        assert!(out.stripped_size < out.original_size / 2);
    }

    #[test]
    fn stripped_output_is_itself_a_valid_blueprint() {
        let buf = scenario_a();
        let out = extract(&buf).unwrap();
        let stripped = &out.stripped_payload;

        assert_eq!(&stripped[..8], &CONTAINER_SIGNATURE);
        assert_eq!(&stripped[12..16], b"IHDR");
        assert_eq!(&stripped[33..45], &TERMINATOR_CHUNK);
        assert_eq!(&stripped[45..], blueprint(200).as_slice());

        let layout = validate(stripped).unwrap();
        assert_eq!(layout.chunk_count, 2);

        // Stripping twice is a fixed point.
        let again = extract(stripped).unwrap();
        assert_eq!(again.stripped_payload, *stripped);
        assert_eq!(again.compression_ratio_percent, 0.0);
    }

    #[test]
    fn branding_and_ancillary_chunks_are_dropped() {
        let mut b = ContainerBuilder::new(ImageHeader::minimal(8, 8));
        b.push(ChunkType::DATA, &[1u8; 64]).unwrap();
        b.push(ChunkType::BRANDING, b"logo").unwrap();
        b.push(ChunkType::new(*b"tEXt"), b"comment").unwrap();
        let mut buf = b.finish();
        buf.extend_from_slice(&blueprint(10));

        let out = extract(&buf).unwrap();
        assert_eq!(validate(&out.stripped_payload).unwrap().branding_offset, None);
        assert_eq!(out.stripped_size, 45 + 27);
    }

    #[test]
    fn split_returns_raster_and_trailing_bytes() {
        let buf = scenario_a();
        let parts = split(&buf).unwrap();

        assert_eq!(parts.raster.len() + parts.payload.len(), buf.len());
        assert!(parts.raster.ends_with(&TERMINATOR_CHUNK));
        assert!(parts.payload.starts_with(&BLUEPRINT_MAGIC));
    }

// # ❌ 2. Payload magic

    #[test]
    fn replaced_magic_is_bad_signature() {
        let mut buf = scenario_a();
        let magic_at = buf.len() - 217;
        buf[magic_at..magic_at + 17].copy_from_slice(b"NOT-A-BLUEPRINT!!");

        match extract(&buf) {
            Err(PayloadError::BadPayloadSignature { prefix }) => {
                assert_eq!(prefix, b"NOT-A-BLUEPRINT!!".to_vec());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn short_trailing_bytes_keep_full_prefix() {
        let mut buf = cover(16);
        buf.extend_from_slice(b"FACT");

        assert_eq!(
            extract(&buf).unwrap_err(),
            PayloadError::BadPayloadSignature { prefix: b"FACT".to_vec() }
        );
    }

    #[test]
    fn nothing_after_terminator_is_no_payload() {
        assert_eq!(extract(&cover(16)).unwrap_err(), PayloadError::NoPayload);
        assert_eq!(verify_payload_signature(&[]).unwrap_err(), PayloadError::NoPayload);
    }

    #[test]
    fn bare_magic_is_accepted() {
        verify_payload_signature(&BLUEPRINT_MAGIC).unwrap();
    }

// # ❌ 3. Structure propagates

    #[test]
    fn structural_error_is_wrapped() {
        let mut buf = scenario_a();
        buf[0] = 0x00;
        assert!(matches!(
            extract(&buf),
            Err(PayloadError::Structure(StructureError::InvalidSignature { .. }))
        ));
    }

    #[test]
    fn corrupted_pixel_crc_is_structural_by_default() {
        let mut buf = scenario_a();
        buf[33 + 8] ^= 0xFF;
        assert!(matches!(
            extract(&buf),
            Err(PayloadError::Structure(StructureError::ChecksumMismatch { offset: 33, .. }))
        ));

        let lenient = ContainerLimits { enforce_crc: false, ..ContainerLimits::default() };
        assert!(extract_with_limits(&buf, &lenient).is_ok());
    }

// # ✅ 4. Attach

    #[test]
    fn attach_then_extract_round_trips_payload() {
        let payload = blueprint(300);
        let built = attach_payload(&cover(1024), &payload).unwrap();

        let out = extract(&built).unwrap();
        assert!(out.stripped_payload.ends_with(&payload));
    }

    #[test]
    fn attach_replaces_existing_trailer() {
        let first = attach_payload(&cover(32), &blueprint(5)).unwrap();
        let second = attach_payload(&first, &blueprint(9)).unwrap();

        assert_eq!(second.len(), cover(32).len() + 17 + 9);
        assert!(second.ends_with(&blueprint(9)));
    }

    #[test]
    fn attach_refuses_foreign_payload() {
        let err = attach_payload(&cover(32), b"PK\x03\x04 zip").unwrap_err();
        assert!(matches!(err, PayloadError::BadPayloadSignature { .. }));
    }

    #[test]
    fn attach_refuses_invalid_cover() {
        let err = attach_payload(&[0u8; 10], &blueprint(1)).unwrap_err();
        assert_eq!(err, PayloadError::Structure(StructureError::TooSmall { have: 10, need: 45 }));
    }

// # 🧾 5. Collaborator JSON

    #[test]
    fn extracted_payload_serializes_camel_case_base64() {
        let mut buf = cover(8);
        buf.extend_from_slice(&blueprint(3));
        let out = extract(&buf).unwrap();

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["originalSize"], buf.len());
        assert_eq!(json["strippedSize"], out.stripped_size);
        assert!(json["compressionRatioPercent"].as_f64().unwrap() > 0.0);

        let encoded = json["strippedPayload"].as_str().unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), out.stripped_payload);
    }

    #[test]
    fn branding_keeps_stripped_sizes() {
        let mut buf = cover(2048);
        buf.extend_from_slice(&blueprint(20));
        let out = extract(&buf).unwrap();
        let (stripped_size, ratio) = (out.stripped_size, out.compression_ratio_percent);

        let mut branded = out.stripped_payload.clone();
        branded.extend_from_slice(&[0u8; 40]);
        let out = out.with_branding(branded);

        assert_eq!(out.stripped_size, stripped_size);
        assert_eq!(out.compression_ratio_percent, ratio);
        assert_eq!(out.branded_size, Some(stripped_size + 40));
        assert_eq!(out.stripped_payload.len(), stripped_size + 40);

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["brandedSize"], stripped_size + 40);
    }

    #[test]
    fn unchanged_branding_records_nothing() {
        let mut buf = cover(8);
        buf.extend_from_slice(&blueprint(3));
        let out = extract(&buf).unwrap();
        let same = out.stripped_payload.clone();

        let out = out.with_branding(same);
        assert_eq!(out.branded_size, None);
        assert!(serde_json::to_value(&out).unwrap().get("brandedSize").is_none());
    }

    #[test]
    fn error_message_shows_expected_magic() {
        let err = PayloadError::BadPayloadSignature { prefix: b"MZ".to_vec() };
        assert_eq!(
            err.to_string(),
            "bad payload signature: expected b\"FACTORY-BLUEPRINT\", got b\"MZ\""
        );
    }

// # 🔁 6. Properties

    proptest! {
        #[test]
        fn prop_stripped_never_larger_than_input(
            data_len in 0usize..4096,
            body in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let mut payload = BLUEPRINT_MAGIC.to_vec();
            payload.extend_from_slice(&body);
            let buf = attach_payload(&cover(data_len), &payload).unwrap();

            let out = extract(&buf).unwrap();
            prop_assert!(out.stripped_size <= out.original_size);
            prop_assert!(out.stripped_payload.ends_with(&payload));
            prop_assert!(out.compression_ratio_percent >= 0.0);
        }
    }
}
