// tests/lifecycle_tests.rs
use cfmask_rs::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn scene() -> SceneMetadata {
    SceneMetadata::new(vec![SceneBand::new(
        "toa_band1",
        "toa_refl",
        "LE70230282011250EDC00_toa_band1.img",
        "LE7TOA",
        [30.0, 30.0],
    )])
}

fn build(variant: MaskVariant) -> OutputProduct {
    OutputProduct::build(&scene(), GridSize::new(3, 4), variant).unwrap()
}

#[test]
fn test_close_before_open_fails() {
    let mut output = build(MaskVariant::Mask);
    let err = output.close().unwrap_err();
    assert!(matches!(err, CfmaskError::NotOpen { operation: "close", .. }));
    assert_eq!(output.state(), LifecycleState::Unopened);
}

#[test]
fn test_free_before_close_fails() {
    let dir = tempdir().unwrap();
    let mut output = build(MaskVariant::Mask);
    output.open(dir.path().join("still_open.img")).unwrap();

    let err = output.free().unwrap_err();
    assert!(matches!(err, CfmaskError::StillOpen { operation: "free", .. }));
    assert!(err.is_contract_violation());
    assert_eq!(output.state(), LifecycleState::Open);

    output.close().unwrap();
    output.free().unwrap();
}

#[test]
fn test_open_write_close_free() {
    let dir = tempdir().unwrap();
    let options = OutputOptions::new(dir.path()).with_envi_header(false);
    let mut output = OutputProduct::create(&scene(), GridSize::new(3, 4), MaskVariant::Mask, &options).unwrap();

    let expected_path = dir.path().join("LE70230282011250EDC00_cfmask.img");
    assert_eq!(output.path(), Some(expected_path.as_path()));

    output.write(&[0, 1, 2, 3, 4, 255, 0, 1, 2, 3, 4, 255]).unwrap();
    output.close().unwrap();
    assert!(!output.is_open());

    let band = output.free().unwrap();
    assert_eq!(output.state(), LifecycleState::Freed);
    assert_eq!(band.file_name, "LE70230282011250EDC00_cfmask.img");
    assert_eq!(fs::metadata(&expected_path).unwrap().len(), 12);
}

#[test]
fn test_write_on_unopened_does_no_io() {
    let dir = tempdir().unwrap();
    let mut output = build(MaskVariant::Confidence);
    let target = dir.path().join(&output.band().file_name);

    let err = output.write(&[0; 12]).unwrap_err();
    assert!(matches!(err, CfmaskError::NotOpen { operation: "write", .. }));
    assert_eq!(output.state(), LifecycleState::Unopened);
    assert!(!target.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    // the same product still opens and writes at that path afterwards
    output.open(&target).unwrap();
    output.write(&[7; 12]).unwrap();
    output.close().unwrap();
    assert_eq!(fs::read(&target).unwrap(), vec![7; 12]);
}

#[test]
fn test_write_after_close_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("closed.img");
    let mut output = build(MaskVariant::Mask);
    output.open(&path).unwrap();
    output.write(&[1; 12]).unwrap();
    output.close().unwrap();

    let err = output.write(&[2; 12]).unwrap_err();
    assert!(matches!(err, CfmaskError::NotOpen { .. }));
    assert_eq!(fs::read(&path).unwrap(), vec![1; 12]);
}

#[test]
fn test_double_close_leaves_file_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("double_close.img");
    let mut output = build(MaskVariant::Mask);
    output.open(&path).unwrap();
    output.write(&[3; 12]).unwrap();

    output.close().unwrap();
    let err = output.close().unwrap_err();
    assert!(matches!(err, CfmaskError::NotOpen { operation: "close", .. }));
    assert_eq!(output.state(), LifecycleState::Closed);
    assert_eq!(fs::read(&path).unwrap(), vec![3; 12]);
}

#[test]
fn test_open_failure_leaves_product_unopened() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir").join("out.img");
    let mut output = build(MaskVariant::Mask);

    let err = output.open(&missing).unwrap_err();
    match &err {
        CfmaskError::StreamOpen { path, product, .. } => {
            assert_eq!(path, &missing);
            assert_eq!(product, "cfmask");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(output.state(), LifecycleState::Unopened);
    assert!(output.write(&[0; 12]).is_err());
}

#[test]
fn test_no_overwrite_option() {
    let dir = tempdir().unwrap();
    let existing = dir.path().join("LE70230282011250EDC00_cfmask.img");
    fs::write(&existing, b"previous run").unwrap();

    let options = OutputOptions::new(dir.path()).with_overwrite(false);
    let err = OutputProduct::create(&scene(), GridSize::new(3, 4), MaskVariant::Mask, &options).unwrap_err();
    assert!(matches!(err, CfmaskError::StreamOpen { .. }));
    assert_eq!(fs::read(&existing).unwrap(), b"previous run");
}

#[test]
fn test_finish_writes_header() {
    let dir = tempdir().unwrap();
    let options = OutputOptions::new(dir.path());
    let mut output = OutputProduct::create(&scene(), GridSize::new(3, 4), MaskVariant::Confidence, &options).unwrap();
    output.write(&[0; 12]).unwrap();
    output.finish(&options).unwrap();

    let header = fs::read_to_string(Path::new(dir.path()).join("LE70230282011250EDC00_cfmask_conf.hdr")).unwrap();
    assert!(header.contains("lines = 3"));
    assert!(header.contains("samples = 4"));
    assert!(header.contains("band names = {cfmask_conf}"));
}

#[test]
fn test_error_messages_name_operation_and_product() {
    let mut output = build(MaskVariant::Confidence);
    let message = output.close().unwrap_err().to_string();
    assert!(message.contains("close"));
    assert!(message.contains("cfmask_conf"));
}

#[test]
fn test_header_write_failure_names_operation_and_product() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    let output = build(MaskVariant::Confidence);

    let err = output.write_envi_header(&missing).unwrap_err();
    assert!(matches!(err, CfmaskError::Write { operation: "write_envi_header", .. }));
    let message = err.to_string();
    assert!(message.contains("write_envi_header"));
    assert!(message.contains("cfmask_conf"));
    assert!(!missing.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_device_full_write_keeps_product_open() {
    let mut output = build(MaskVariant::Mask);
    output.open("/dev/full").unwrap();

    let err = output.write(&[1; 12]).unwrap_err();
    assert!(matches!(err, CfmaskError::Write { operation: "write", .. }));
    assert!(err.to_string().contains("cfmask"));
    assert!(output.is_open());
    assert_eq!(output.state(), LifecycleState::Open);

    // nothing from the failed write is held back, so close has nothing left to fail on
    output.close().unwrap();
    assert_eq!(output.state(), LifecycleState::Closed);

    let band = output.free().unwrap();
    assert_eq!(band.name, "cfmask");
    assert_eq!(output.state(), LifecycleState::Freed);
}
