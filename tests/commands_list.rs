mod context {
    pub use profiles::context::*;
}

mod error {
    pub use profiles::error::*;
}

mod profile {
    pub use profiles::profile::*;
}

mod list_under_test {
    #![allow(dead_code)]

    include!("../src/commands/list.rs");

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn marks_current_profile() {
        let entries = profile_entries(names(&["Default", "Work"]), "Work");
        let current: Vec<&str> = entries
            .iter()
            .filter(|entry| entry.current)
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(current, ["Work"]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn includes_unsaved_current_profile_in_order() {
        let entries = profile_entries(names(&["Alpha", "Zulu"]), "Mike");
        let listed: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(listed, ["Alpha", "Mike", "Zulu"]);
        assert!(entries[1].current);
    }

    #[test]
    fn empty_store_still_lists_current() {
        let entries = profile_entries(Vec::new(), "Default");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].current);
    }
}
