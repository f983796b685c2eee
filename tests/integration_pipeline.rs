// tests/integration_pipeline.rs
//! End-to-end runs over files on disk.

use popleague_core::config::Config;
use popleague_core::error::LeagueError;
use popleague_core::pipeline::Pipeline;
use popleague_core::rank::MissingPolicy;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(edges: &str, league: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("edges.txt"), edges).unwrap();
        fs::write(dir.path().join("league.txt"), league).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self) -> Config {
        let mut c = Config::new();
        c.paths.input = Some(self.path("edges.txt"));
        c.paths.output = Some(self.path("out/ranks.tsv"));
        c.paths.league = Some(self.path("league.txt"));
        c.paths.intermediate = self.path("tmp/popularity.tsv");
        c
    }

    fn output(&self) -> String {
        fs::read_to_string(self.path("out/ranks.tsv")).unwrap()
    }
}

fn run(config: Config) -> popleague_core::Result<popleague_core::types::RunReport> {
    Pipeline::new(config)?.run()
}

#[test]
fn test_reference_scenario_end_to_end() {
    let f = Fixture::new("1: 2 3\n2: 3\n", "2\n3\n");
    let report = run(f.config()).unwrap();

    assert_eq!(f.output(), "2\t0\n3\t1\n");
    assert_eq!(
        fs::read_to_string(f.path("tmp/popularity.tsv")).unwrap(),
        "2\t1\n3\t2\n"
    );
    assert_eq!(report.edges, 3);
    assert_eq!(report.distinct_nodes, 2);
    assert_eq!(report.ranked, 2);
}

#[test]
fn test_zero_in_degree_member_is_ranked_first() {
    let f = Fixture::new("1: 2 3\n2: 3\n", "4\n");
    run(f.config()).unwrap();
    assert_eq!(f.output(), "4\t0\n");
}

#[test]
fn test_omit_policy_leaves_member_out() {
    let f = Fixture::new("1: 2 3\n2: 3\n", "4\n3\n");
    let mut c = f.config();
    c.ranking.missing = MissingPolicy::Omit;
    let report = run(c).unwrap();
    assert_eq!(f.output(), "3\t0\n");
    assert_eq!(report.omitted, vec![4]);
    assert!(report.has_omissions());
}

#[test]
fn test_malformed_edge_line_writes_nothing() {
    let f = Fixture::new("1: 2 3\nx: 2 3\n", "2\n3\n");
    let err = run(f.config()).unwrap_err();
    assert!(matches!(err, LeagueError::Parse { .. }), "Got: {err}");
    assert!(!f.path("out/ranks.tsv").exists());
    assert!(!f.path("tmp/popularity.tsv").exists());
}

#[test]
fn test_failed_rerun_removes_stale_output() {
    let f = Fixture::new("1: 2 3\n2: 3\n", "2\n3\n");
    run(f.config()).unwrap();
    assert!(f.path("out/ranks.tsv").exists());

    fs::write(f.path("edges.txt"), "1: oops\n").unwrap();
    assert!(run(f.config()).is_err());
    assert!(!f.path("out/ranks.tsv").exists());
}

#[test]
fn test_missing_league_is_configuration_error() {
    let f = Fixture::new("1: 2 3\n", "");
    fs::remove_file(f.path("league.txt")).unwrap();
    let err = run(f.config()).unwrap_err();
    assert!(matches!(err, LeagueError::Configuration { .. }), "Got: {err}");
    assert!(!f.path("out/ranks.tsv").exists());
    assert!(
        !f.path("tmp/popularity.tsv").exists(),
        "League errors must surface before the count phase writes anything"
    );
}

#[test]
fn test_bad_league_entry_fails_before_counting() {
    let f = Fixture::new("1: 2 3\n", "2\nabc\n");
    let err = run(f.config()).unwrap_err();
    assert!(matches!(err, LeagueError::Configuration { .. }), "Got: {err}");
    assert!(!f.path("tmp/popularity.tsv").exists());
    assert!(!f.path("out/ranks.tsv").exists());
}

#[test]
fn test_unset_input_path_fails_before_touching_disk() {
    let f = Fixture::new("1: 2 3\n", "2\n");
    let mut c = f.config();
    c.paths.input = None;
    let err = run(c).unwrap_err();
    assert!(err.to_string().contains("input"), "Got: {err}");
    assert!(!f.path("tmp/popularity.tsv").exists());
}

#[test]
fn test_empty_league_writes_empty_output() {
    let f = Fixture::new("1: 2 3\n", "\n");
    let report = run(f.config()).unwrap();
    assert_eq!(report.ranked, 0);
    assert_eq!(f.output(), "");
}

#[test]
fn test_rerun_is_byte_identical() {
    let edges: String = (0..2000)
        .map(|i| format!("{i}: {} {} {}\n", i % 13, (i * 7) % 101, i % 5))
        .collect();
    let league: String = (0..40).map(|i| format!("{}\n", i * 3)).collect();
    let f = Fixture::new(&edges, &league);

    let mut c = f.config();
    c.execution.chunk_lines = 17;
    run(c).unwrap();
    let first_out = f.output();
    let first_table = fs::read_to_string(f.path("tmp/popularity.tsv")).unwrap();

    let mut c = f.config();
    c.execution.chunk_lines = 500;
    c.execution.threads = 2;
    run(c).unwrap();
    assert_eq!(f.output(), first_out);
    assert_eq!(
        fs::read_to_string(f.path("tmp/popularity.tsv")).unwrap(),
        first_table
    );
}

#[test]
fn test_directory_input_counts_all_partitions() {
    let f = Fixture::new("", "2\n3\n5\n");
    let parts = f.path("parts");
    fs::create_dir_all(&parts).unwrap();
    fs::write(parts.join("part-00000"), "1: 2 3\n").unwrap();
    fs::write(parts.join("part-00001"), "2: 3\n4: 5 5 5\n").unwrap();
    fs::write(parts.join("_SUCCESS"), "").unwrap();

    let mut c = f.config();
    c.paths.input = Some(parts);
    let report = run(c).unwrap();
    assert_eq!(report.input_files, 2);
    assert_eq!(f.output(), "2\t0\n3\t1\n5\t2\n");
}

#[test]
fn test_rank_phase_requires_count_phase() {
    let f = Fixture::new("1: 2\n", "2\n");
    let err = Pipeline::new(f.config()).unwrap().rank_phase().unwrap_err();
    assert!(matches!(err, LeagueError::Io { .. }));
    assert!(!Path::new(&f.path("out/ranks.tsv")).exists());
}

#[test]
fn test_phases_can_run_separately() {
    let f = Fixture::new("1: 2 3\n2: 3\n", "3\n2\n");
    let pipeline = Pipeline::new(f.config()).unwrap();
    let counted = pipeline.count_phase().unwrap();
    assert_eq!(counted.edges, 3);
    let ranked = pipeline.rank_phase().unwrap();
    assert_eq!(ranked.league_size, 2);
    assert_eq!(f.output(), "2\t0\n3\t1\n");
}
