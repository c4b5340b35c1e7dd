use dvr::{
    engine::{Relaxation, RelaxationMode},
    loader::{self, error::Err as LoadError},
    report::{Order, Report},
    types::Distance,
};
use std::io::Write;
use tempfile::NamedTempFile;

const TOPOLOGY: &str = "\
u bellman-ford 2 v 1
bellman-ford u 2 v 5 w 9
v w 1 x 7
w x 2
x
";

fn create_topology_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_run() {
    let file = create_topology_file(TOPOLOGY);
    let graph = loader::load(file.path()).unwrap();
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.num_edges(), 8);

    let textbook = Relaxation::new(&graph, "bellman-ford")
        .mode(RelaxationMode::Textbook)
        .run();
    assert_eq!(textbook.num_rounds(), 4);
    let expected = [
        ("bellman-ford", 0.0),
        ("u", 2.0),
        ("v", 3.0),
        ("w", 4.0),
        ("x", 6.0),
    ];
    for &(vid, d) in &expected {
        assert_eq!(textbook.distance(vid), Some(Distance::Finite(d)));
    }
    assert_eq!(
        textbook.path_to("x").unwrap(),
        vec!["bellman-ford", "u", "v", "w", "x"]
    );

    // `u` is listed first, so its edges never relax: `v` is only reached directly.
    let faithful = Relaxation::new(&graph, "bellman-ford").run();
    assert_eq!(faithful.num_rounds(), 4);
    assert_eq!(faithful.distance("u"), Some(Distance::Finite(2.0)));
    assert_eq!(faithful.distance("v"), Some(Distance::Finite(5.0)));
    assert_eq!(faithful.distance("w"), Some(Distance::Finite(6.0)));
    assert_eq!(faithful.distance("x"), Some(Distance::Finite(8.0)));
    assert_eq!(
        faithful.predecessor("v").map(String::as_str),
        Some("bellman-ford")
    );
}

#[test]
fn test_report() {
    let file = create_topology_file("b c 1\na b 1\nc\n");
    let graph = loader::load(file.path()).unwrap();
    let result = Relaxation::new(&graph, "a").run();
    assert_eq!(
        Report::new(&result).order(Order::Sorted).to_string(),
        concat!(
            "\n",
            "--Shortest Path Distance List Iterations--\n",
            "a: 0 b: 1 c: inf \n",
            "a: 0 b: 1 c: inf \n",
            "\n",
            "--Shortest Path Predecessor List--\n",
            "a preceeded by NULL\n",
            "b preceeded by a\n",
            "c preceeded by NULL\n",
        )
    );
}

#[test]
fn test_default_source_missing() {
    let file = create_topology_file("a b 1\nb a 1\n");
    let graph = loader::load(file.path()).unwrap();
    let result = Relaxation::new(&graph, "bellman-ford").run();
    assert_eq!(result.num_rounds(), 1);
    assert!(result
        .distances()
        .iter()
        .all(|(_, d)| *d == Distance::Infinite));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match loader::load(&path) {
        Err(e @ LoadError::Io { .. }) => {
            assert_eq!(e.line(), None);
            assert!(e.to_string().contains("missing.txt"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_malformed_line() {
    let file = create_topology_file("a b 1\nb c 2 d\nc\n");
    match loader::load(file.path()) {
        Err(e @ LoadError::Syntax(_)) => {
            assert_eq!(e.line(), Some(2));
            let path = file.path().to_string_lossy().into_owned();
            assert!(e.to_string().contains(&path));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_small_topologies() {
    let file = create_topology_file("A B 1\nB C 2\n");
    let graph = loader::load(file.path()).unwrap();
    let result = Relaxation::new(&graph, "A")
        .mode(RelaxationMode::Textbook)
        .run();
    assert_eq!(
        Report::new(&result).to_string(),
        concat!(
            "\n",
            "--Shortest Path Distance List Iterations--\n",
            "A: 0 B: 1 C: inf \n",
            "A: 0 B: 1 C: 3 \n",
            "\n",
            "--Shortest Path Predecessor List--\n",
            "A preceeded by NULL\n",
            "B preceeded by A\n",
            "C preceeded by B\n",
        )
    );

    let file = create_topology_file("X Y 5\n");
    let graph = loader::load(file.path()).unwrap();
    let result = Relaxation::new(&graph, "Y").run();
    assert_eq!(
        Report::new(&result).to_string(),
        concat!(
            "\n",
            "--Shortest Path Distance List Iterations--\n",
            "X: inf Y: 0 \n",
            "\n",
            "--Shortest Path Predecessor List--\n",
            "X preceeded by NULL\n",
            "Y preceeded by NULL\n",
        )
    );
}
