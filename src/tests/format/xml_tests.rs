use serde::Deserialize;

use crate::format::{FormatKind, default_dispatcher, deserialize};

#[derive(Debug, Deserialize, PartialEq)]
struct Service {
    name: String,
    port: u16,
}

#[test]
fn xml_decodes_child_elements() {
    let xml = b"<service><name>api</name><port>8080</port></service>";
    let decoded: Service = deserialize(FormatKind::Xml, xml).unwrap();

    assert_eq!(
        decoded,
        Service {
            name: "api".into(),
            port: 8080,
        }
    );
}

#[test]
fn xml_selected_by_upper_case_suffix() {
    let dispatcher = default_dispatcher();
    let xml = b"<service><name>db</name><port>5432</port></service>";

    let decoded: Service = dispatcher.decode_bytes("SERVICE.XML", xml).unwrap();

    assert_eq!(decoded.port, 5432);
}

#[test]
fn xml_rejects_invalid_utf8() {
    let result: Result<Service, _> = deserialize(FormatKind::Xml, &[0xff, 0xfe, 0x3c]);
    assert!(result.is_err());
}
