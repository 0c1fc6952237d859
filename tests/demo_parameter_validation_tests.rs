#[cfg(test)]
mod tests {
    use glob::glob;
    use pendulum_animator::pendulum::{driver::Driver, params::AnimationParams};
    use std::fs;

    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let mut count = 0;
        // For each match, ensure that we can (1) open the file, (2) parse it, and
        // (3) build a driver from it.
        for entry in glob("demos/**/*.json").expect("Failed to read glob pattern") {
            let path = entry.unwrap_or_else(|e| panic!("Failed to read path: {:?}", e));
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));
            let params: AnimationParams = serde_json::from_str(&content)
                .unwrap_or_else(|err| panic!("Failed to parse {:?}:\n\n{:?}\n", path, err));
            assert!(!params.pendulums.is_empty(), "no pendulums in {:?}", path);
            if let Err(err) = Driver::new(&params) {
                panic!("Invalid configuration in {:?}: {}", path, err);
            }
            count += 1;
        }
        assert!(count >= 3);
    }

    #[test]
    fn test_reference_pair_demo_matches_builtin_reference() {
        let content = fs::read_to_string("demos/reference_pair.json").unwrap();
        let params: AnimationParams = serde_json::from_str(&content).unwrap();
        assert_eq!(params, AnimationParams::reference());
    }
}
