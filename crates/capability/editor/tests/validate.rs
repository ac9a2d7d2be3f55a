mod common;

use common::valid_values;
use domain::OptionItem;
use nms_editor::{FormField, FormState, validate_form};
use nms_i18n::StaticTranslator;

#[test]
fn valid_form_has_no_errors() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        device_type_id_selection: Some(OptionItem::new("1", "router")),
        ..valid_values()
    };
    assert!(validate_form(&values, &t).is_empty());
}

#[test]
fn invalid_address_is_the_only_error() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        address: "999.999.999.999".to_string(),
        ..valid_values()
    };

    let errors = validate_form(&values, &t);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&FormField::Address).map(String::as_str),
        Some(t_key(&t, "invalidIP").as_str())
    );
}

#[test]
fn missing_fields_report_exactly_those_fields() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        name: String::new(),
        device_type_id_selection: None,
        ..valid_values()
    };

    let errors = validate_form(&values, &t);

    let fields: Vec<FormField> = errors.keys().copied().collect();
    assert_eq!(fields, vec![FormField::Name, FormField::DeviceTypeIdSelection]);
    let mandatory = t_key(&t, "mandatory");
    assert!(errors.values().all(|message| *message == mandatory));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        name: "   ".to_string(),
        port: " ".to_string(),
        ..valid_values()
    };

    let errors = validate_form(&values, &t);
    let mandatory = t_key(&t, "mandatory");
    assert_eq!(errors.get(&FormField::Name), Some(&mandatory));
    assert_eq!(errors.get(&FormField::Port), Some(&mandatory));
}

#[test]
fn port_out_of_range_is_invalid() {
    let t = StaticTranslator::builtin("en");
    let invalid_port = t_key(&t, "invalidPort");
    for port in ["0", "65536", "80a", "-1", "8.5"] {
        let values = FormState {
            port: port.to_string(),
            ..valid_values()
        };
        let errors = validate_form(&values, &t);
        assert_eq!(errors.get(&FormField::Port), Some(&invalid_port), "port {port}");
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn padded_address_and_port_are_rejected_not_submitted() {
    use nms_editor::build_submission;
    use nms_network::{is_valid_ip_address, is_valid_port};

    let t = StaticTranslator::builtin("en");
    let values = FormState {
        address: " 10.0.0.1 ".to_string(),
        port: " 8080".to_string(),
        ..valid_values()
    };

    let errors = validate_form(&values, &t);
    assert_eq!(errors.get(&FormField::Address), Some(&t_key(&t, "invalidIP")));
    assert_eq!(errors.get(&FormField::Port), Some(&t_key(&t, "invalidPort")));
    assert_eq!(errors.len(), 2);

    // 通过校验的表单，提交出去的文本与校验的文本一致
    let clean = valid_values();
    assert!(validate_form(&clean, &t).is_empty());
    let submitted = build_submission(&clean, None).into_record();
    assert!(is_valid_ip_address(&submitted.address));
    assert!(is_valid_port(&submitted.port));
}

#[test]
fn ipv6_address_is_accepted() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        address: "fe80::1".to_string(),
        ..valid_values()
    };
    assert!(validate_form(&values, &t).is_empty());
}

#[test]
fn optional_fields_never_produce_errors() {
    let t = StaticTranslator::builtin("en");
    let values = FormState {
        edge_id_selection: None,
        uplink_asset_id_selection: None,
        group_ids_selection: Vec::new(),
        location_name: None,
        location_lat_lng: None,
        ..valid_values()
    };
    assert!(validate_form(&values, &t).is_empty());
}

#[test]
fn messages_follow_locale() {
    let t = StaticTranslator::builtin("zh-CN");
    let errors = validate_form(&FormState::default(), &t);
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(&FormField::Name), Some(&t_key(&t, "mandatory")));
    assert_ne!(t_key(&t, "mandatory"), "mandatory");
}

fn t_key(t: &StaticTranslator, key: &str) -> String {
    use nms_i18n::Translator;
    t.t(key)
}
