use zini::{Document, IniError, Limits};

#[cfg(test)]
mod document_tests {
    use super::*;

    fn net_document() -> Document {
        let mut doc = Document::new();
        let net = doc.add_section("Net").unwrap();
        net.add_pair("host", "localhost").unwrap();
        net.add_pair("port", "8080").unwrap();
        doc
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new();
        assert_eq!(doc.section_count(), 0);
        assert_eq!(doc.slot_count(), 0);
        assert!(!doc.is_modified());
        assert_eq!(doc.to_ini_string(), "");
    }

    #[test]
    fn test_clean_twice_leaves_empty_state() {
        let mut doc = net_document();
        assert!(doc.is_modified());

        doc.clean();
        assert_eq!(doc.slot_count(), 0);
        assert!(!doc.is_modified());

        doc.clean();
        assert_eq!(doc.slot_count(), 0);
        assert!(!doc.is_modified());
        assert_eq!(doc.to_ini_string(), "");
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut doc = net_document();
        doc.init();
        doc.init();
        assert_eq!(doc.section_count(), 0);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_add_section_appends_duplicates() {
        let mut doc = Document::new();
        doc.add_section("X").unwrap().add_pair("a", "1").unwrap();
        doc.add_section("X").unwrap().add_pair("b", "2").unwrap();

        assert_eq!(doc.section_count(), 2);
        // Lookups see the first section only
        assert_eq!(doc.get_value_ex("X", "a"), Some("1"));
        assert_eq!(doc.get_value_ex("X", "b"), None);
        assert_eq!(doc.to_ini_string(), "[X]\na=1\n\n[X]\nb=2\n\n");
    }

    #[test]
    fn test_find_section_is_case_sensitive() {
        let doc = net_document();
        assert!(doc.find_section("Net").is_some());
        assert!(doc.find_section("net").is_none());
        assert!(doc.section_exists("Net"));
        assert!(!doc.section_exists("NET"));
        assert!(!doc.section_exists(""));
    }

    #[test]
    fn test_remove_section_leaves_tombstone() {
        let mut doc = net_document();
        doc.add_section("Auth").unwrap().add_pair("token", "abc").unwrap();
        doc.add_section("Log").unwrap();

        doc.remove_section("Auth").unwrap();

        assert!(!doc.section_exists("Auth"));
        assert_eq!(doc.get_value_ex("Auth", "token"), None);
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.slot_count(), 3);
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["Net", "Log"]);
    }

    #[test]
    fn test_remove_missing_section() {
        let mut doc = Document::new();
        match doc.remove_section("Ghost") {
            Err(IniError::SectionNotFound(name)) => assert_eq!(name, "Ghost"),
            other => panic!("Expected SectionNotFound, got {:?}", other),
        }
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_readding_removed_section_name() {
        let mut doc = net_document();
        doc.remove_section("Net").unwrap();
        doc.add_section("Net").unwrap().add_pair("host", "example.com").unwrap();

        assert_eq!(doc.get_value_ex("Net", "host"), Some("example.com"));
        assert_eq!(doc.get_value_ex("Net", "port"), None);
        assert_eq!(doc.slot_count(), 2);
    }

    #[test]
    fn test_duplicate_key_insertion() {
        let mut doc = Document::new();
        let s = doc.add_section("S").unwrap();
        s.add_pair("k", "a").unwrap();
        s.add_pair("k", "b").unwrap();

        assert_eq!(s.get_value("k"), Some("a"));
        assert!(s.key_exists("k"));
        assert_eq!(s.pair_count(), 2);
        assert_eq!(s.slot_count(), 2);
    }

    #[test]
    fn test_key_exists_past_removed_copies() {
        let mut doc = Document::new();
        doc.parse_str("[S]\nk=a\nk=b\n").unwrap();
        assert!(doc.find_section("S").unwrap().key_exists("k"));

        let s = doc.find_section_mut("S").unwrap();
        assert_eq!(s.remove_pair("k"), 2);
        assert!(!s.key_exists("k"));

        // A fresh copy after the tombstones is found again
        s.add_pair("k", "c").unwrap();
        assert!(s.key_exists("k"));
        assert_eq!(s.get_value("k"), Some("c"));
        assert_eq!(s.slot_count(), 3);
    }

    #[test]
    fn test_tombstoned_pair_is_invisible() {
        let mut doc = net_document();
        let net = doc.find_section_mut("Net").unwrap();
        assert!(net.key_exists("host"));
        assert_eq!(net.remove_pair("host"), 1);

        assert_eq!(net.get_value("host"), None);
        assert!(!net.key_exists("host"));
        assert_eq!(net.slot_count(), 2);
        assert_eq!(net.pair_count(), 1);
        assert_eq!(doc.to_ini_string(), "[Net]\nport=8080\n\n");
    }

    #[test]
    fn test_set_value_on_absent_key_is_noop() {
        let mut doc = net_document();
        let before = doc.find_section("Net").unwrap().clone();

        let net = doc.find_section_mut("Net").unwrap();
        assert!(!net.set_value("missing", "x"));

        assert_eq!(doc.find_section("Net").unwrap(), &before);
    }

    #[test]
    fn test_set_value_ex_flags_only_real_updates() {
        let mut doc = Document::new();
        doc.parse_str("[Net]\nport=80\n").unwrap();
        assert!(!doc.is_modified());

        assert!(!doc.set_value_ex("Net", "missing", "x").unwrap());
        assert!(!doc.is_modified());

        assert!(doc.set_value_ex("Net", "port", "8080").unwrap());
        assert_eq!(doc.get_value_ex("Net", "port"), Some("8080"));
        assert!(doc.is_modified());
    }

    #[test]
    fn test_by_name_operations_on_missing_section() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.set_value_ex("Nope", "k", "v"),
            Err(IniError::SectionNotFound(_))
        ));
        assert!(matches!(
            doc.remove_pair_ex("Nope", "k"),
            Err(IniError::SectionNotFound(_))
        ));
        assert!(matches!(
            doc.add_pair_ex("Nope", "k", "v"),
            Err(IniError::SectionNotFound(_))
        ));
        assert_eq!(doc.get_value_ex("Nope", "k"), None);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_remove_pair_ex_removes_every_match() {
        let mut doc = Document::new();
        doc.parse_str("[S]\nk=a\nj=x\nk=b\n").unwrap();

        assert_eq!(doc.remove_pair_ex("S", "k").unwrap(), 2);
        assert!(doc.is_modified());
        assert_eq!(doc.to_ini_string(), "[S]\nj=x\n\n");
        assert_eq!(doc.find_section("S").unwrap().slot_count(), 3);
    }

    #[test]
    fn test_add_pair_modified_asymmetry() {
        let mut doc = Document::new();
        doc.parse_str("[S]\n").unwrap();
        assert!(!doc.is_modified());

        // Going through the section handle does not flag the document
        doc.find_section_mut("S").unwrap().add_pair("a", "1").unwrap();
        assert!(!doc.is_modified());

        doc.mark_modified();
        assert!(doc.is_modified());
        doc.init();

        doc.parse_str("[S]\n").unwrap();
        doc.add_pair_ex("S", "b", "2").unwrap();
        assert!(doc.is_modified());
        assert_eq!(doc.get_value_ex("S", "b"), Some("2"));
    }

    #[test]
    fn test_key_truncated_to_default_bound() {
        let mut doc = Document::new();
        let long_key = "k".repeat(300);
        let long_value = "v".repeat(300);
        let s = doc.add_section("S").unwrap();
        let pair = s.add_pair(&long_key, &long_value).unwrap();

        assert_eq!(pair.key().len(), 127);
        assert_eq!(pair.value().len(), 127);

        // Only the stored key matches, never the longer original
        let stored_key = "k".repeat(127);
        assert_eq!(s.get_value(&stored_key).map(str::len), Some(127));
        assert_eq!(s.get_value(&long_key), None);
        assert!(!s.key_exists(&long_key));
    }

    #[test]
    fn test_over_long_queries_do_not_match() {
        let mut doc = Document::new();
        let stored_name = "N".repeat(127);
        doc.add_section(&stored_name)
            .unwrap()
            .add_pair(&"k".repeat(127), "v")
            .unwrap();

        let long_name = "N".repeat(200);
        assert!(doc.section_exists(&stored_name));
        assert!(!doc.section_exists(&long_name));
        assert!(doc.find_section(&long_name).is_none());
        assert_eq!(doc.get_value_ex(&long_name, &"k".repeat(300)), None);
        assert_eq!(doc.get_value_ex(&stored_name, &"k".repeat(300)), None);
        assert_eq!(doc.get_value_ex(&stored_name, &"k".repeat(127)), Some("v"));
        assert!(matches!(
            doc.remove_section(&long_name),
            Err(IniError::SectionNotFound(_))
        ));
    }

    #[test]
    fn test_prefix_queries_do_not_match() {
        let limits = Limits {
            max_key_len: 4,
            ..Limits::default()
        };
        let mut doc = Document::with_limits(limits).unwrap();
        doc.add_section("S").unwrap().add_pair("hos", "1").unwrap();

        let s = doc.find_section_mut("S").unwrap();
        assert_eq!(s.get_value("host"), None);
        assert!(!s.key_exists("hostile"));
        assert!(!s.set_value("host", "2"));
        assert_eq!(s.remove_pair("hostile"), 0);

        assert_eq!(doc.remove_pair_ex("S", "hostile").unwrap(), 0);
        assert!(!doc.set_value_ex("S", "hostname", "3").unwrap());
        assert_eq!(doc.get_value_ex("S", "hos"), Some("1"));
    }

    #[test]
    fn test_name_truncated_to_nothing_is_rejected() {
        let limits = Limits {
            max_section_len: 2,
            ..Limits::default()
        };
        let mut doc = Document::with_limits(limits).unwrap();
        assert!(matches!(
            doc.add_section("é"),
            Err(IniError::InvalidInput(_))
        ));
        assert_eq!(doc.slot_count(), 0);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_custom_limits_truncate_every_write_path() {
        let limits = Limits {
            max_section_len: 5,
            max_key_len: 4,
            max_value_len: 6,
        };
        let mut doc = Document::with_limits(limits).unwrap();
        let s = doc.add_section("Network").unwrap();
        assert_eq!(s.name(), "Netw");
        s.add_pair("hostname", "localhost").unwrap();
        assert!(!s.set_value("hostname", "example.com"));
        assert!(s.set_value("hos", "example.com"));

        assert_eq!(doc.to_ini_string(), "[Netw]\nhos=examp\n\n");
    }

    #[test]
    fn test_print_to_byte_sink() {
        let doc = {
            let mut doc = Document::new();
            doc.parse_str("[Net]\nhost=localhost\n\n[Auth]\ntoken=abc\n").unwrap();
            doc
        };
        let mut sink: Vec<u8> = Vec::new();
        doc.print(&mut sink).unwrap();
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[Net]\nhost=localhost\n\n[Auth]\ntoken=abc\n\n"
        );
        assert_eq!(doc.to_string(), doc.to_ini_string());
    }
}
