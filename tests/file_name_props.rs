// tests/file_name_props.rs
use cfmask_rs::naming::{derive_file_name, header_file_name, scene_identifier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scene_identifier_has_no_underscore(name in "[A-Za-z0-9_.]{0,40}") {
        let scene = scene_identifier(&name);
        prop_assert!(!scene.contains('_'));
        prop_assert!(name.starts_with(scene));
        if !name.contains('_') {
            prop_assert_eq!(scene, name.as_str());
        }
    }

    #[test]
    fn derived_name_is_scene_band_img(name in "[A-Za-z0-9_.]{0,40}", band in "cfmask|cfmask_conf") {
        let file_name = derive_file_name(&name, &band);
        prop_assert_eq!(&file_name, &format!("{}_{}.img", scene_identifier(&name), band));
        prop_assert_eq!(derive_file_name(&name, &band), file_name.clone());
        prop_assert_eq!(header_file_name(&file_name), format!("{}_{}.hdr", scene_identifier(&name), band));
    }
}
