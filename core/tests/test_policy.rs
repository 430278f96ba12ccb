// Upload policy and configuration suite.
//
// * size floor / ceiling boundaries
// * filename extension gating, disguised executables
// * JSON config overrides and validation

#[cfg(test)]
mod tests {
    use blueprint_core::config::{ConfigError, GuardConfig};
    use blueprint_core::constants::{MAX_CHUNKS, MAX_UPLOAD_BYTES, MIN_UPLOAD_BYTES};
    use blueprint_core::policy::{check_filename, check_size, check_upload, PolicyError};

// # 📏 1. Size

    #[test]
    fn size_boundaries() {
        let cfg = GuardConfig::default();

        assert_eq!(
            check_size(MIN_UPLOAD_BYTES - 1, &cfg).unwrap_err(),
            PolicyError::TooSmall { have: 99, min: 100 }
        );
        check_size(MIN_UPLOAD_BYTES, &cfg).unwrap();
        check_size(MAX_UPLOAD_BYTES, &cfg).unwrap();
        assert_eq!(
            check_size(MAX_UPLOAD_BYTES + 1, &cfg).unwrap_err(),
            PolicyError::TooLarge { have: MAX_UPLOAD_BYTES + 1, max: MAX_UPLOAD_BYTES }
        );
    }

// # 🏷️ 2. Filename

    #[test]
    fn blueprint_extension_is_accepted_any_case() {
        let cfg = GuardConfig::default();
        check_filename("main-bus.af", &cfg).unwrap();
        check_filename("Main Bus v2.AF", &cfg).unwrap();
        check_filename("smelter.array.af", &cfg).unwrap();
    }

    #[test]
    fn missing_extension() {
        let cfg = GuardConfig::default();
        assert_eq!(
            check_filename("blueprint", &cfg).unwrap_err(),
            PolicyError::MissingExtension { name: "blueprint".into() }
        );
    }

    #[test]
    fn wrong_extension() {
        let cfg = GuardConfig::default();
        assert_eq!(
            check_filename("preview.png", &cfg).unwrap_err(),
            PolicyError::WrongExtension { found: "png".into(), expected: "af".into() }
        );
    }

    #[test]
    fn disguised_executable_is_rejected() {
        let cfg = GuardConfig::default();
        assert_eq!(
            check_filename("setup.EXE.af", &cfg).unwrap_err(),
            PolicyError::DisguisedExtension { name: "setup.EXE.af".into(), inner: "exe".into() }
        );
        assert!(matches!(
            check_filename("a.b.ps1.af", &cfg),
            Err(PolicyError::DisguisedExtension { .. })
        ));
    }

    #[test]
    fn leading_segment_is_not_an_extension() {
        // "exe" as the whole stem is a name, not a hidden extension.
        check_filename("exe.af", &GuardConfig::default()).unwrap();
    }

    #[test]
    fn malformed_names_are_invalid() {
        let cfg = GuardConfig::default();
        for name in [".af", "../x.af", "dir\\x.af", "bad\u{0}name.af", "line\nbreak.af"] {
            assert!(
                matches!(check_filename(name, &cfg), Err(PolicyError::InvalidFilename { .. })),
                "{:?} should be invalid",
                name
            );
        }
    }

    #[test]
    fn upload_checks_size_before_name() {
        let cfg = GuardConfig::default();
        assert!(matches!(
            check_upload("virus.exe", 10, &cfg),
            Err(PolicyError::TooSmall { .. })
        ));
        check_upload("ok.af", 1000, &cfg).unwrap();
    }

    #[test]
    fn policy_messages() {
        let err = PolicyError::WrongExtension { found: "zip".into(), expected: "af".into() };
        assert_eq!(err.to_string(), "wrong file extension: .zip (expected .af)");
    }

// # ⚙️ 3. Config

    #[test]
    fn defaults_match_constants() {
        let cfg = GuardConfig::default();
        assert_eq!(cfg.min_upload_bytes, MIN_UPLOAD_BYTES);
        assert_eq!(cfg.max_upload_bytes, MAX_UPLOAD_BYTES);
        assert_eq!(cfg.allowed_extension, "af");
        assert_eq!(cfg.limits.max_chunks, MAX_CHUNKS);
        assert!(cfg.limits.enforce_crc);
        assert!(cfg.scan_content);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_overrides_keep_defaults() {
        let cfg = GuardConfig::from_json_str(
            r#"{ "max_upload_bytes": 4096, "limits": { "enforce_crc": false } }"#,
        )
        .unwrap();

        assert_eq!(cfg.max_upload_bytes, 4096);
        assert!(!cfg.limits.enforce_crc);
        assert_eq!(cfg.limits.max_chunks, MAX_CHUNKS);
        assert_eq!(cfg.min_upload_bytes, MIN_UPLOAD_BYTES);
    }

    #[test]
    fn custom_extension_drives_filename_policy() {
        let cfg = GuardConfig::from_json_str(r#"{ "allowed_extension": "bp" }"#).unwrap();
        check_filename("x.bp", &cfg).unwrap();
        assert!(matches!(check_filename("x.af", &cfg), Err(PolicyError::WrongExtension { .. })));
    }

    #[test]
    fn inconsistent_config_is_invalid() {
        for json in [
            r#"{ "min_upload_bytes": 500, "max_upload_bytes": 400 }"#,
            r#"{ "min_upload_bytes": 0, "max_upload_bytes": 10 }"#,
            r#"{ "limits": { "max_chunks": 1 } }"#,
            r#"{ "allowed_extension": "" }"#,
            r#"{ "allowed_extension": ".af" }"#,
        ] {
            assert!(
                matches!(GuardConfig::from_json_str(json), Err(ConfigError::Invalid(_))),
                "{} should be invalid",
                json
            );
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(GuardConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = GuardConfig { scan_content: false, ..GuardConfig::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(GuardConfig::from_json_str(&json).unwrap(), cfg);
    }
}
