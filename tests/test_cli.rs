use std::process::Command;

use hexrefine::{read_hex_mesh, structured_cells, write_hex_mesh, Endian, HexMesh, NodeGrid};

fn hexrefine() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hexrefine"))
}

fn write_box(path: &std::path::Path, extents: [usize; 3]) {
    let mut coords = Vec::new();
    for a0 in 0..extents[0] {
        for a1 in 0..extents[1] {
            for a2 in 0..extents[2] {
                coords.extend([a0 as f32, 2.0 * a1 as f32, 3.0 * a2 as f32]);
            }
        }
    }
    let nodes = NodeGrid::new(extents, coords).unwrap();
    let [c0, c1, c2] = extents.map(|e| e.saturating_sub(1));
    let mesh = HexMesh::new(nodes, structured_cells(c0, c1, c2).unwrap());
    write_hex_mesh(path, &mesh, Endian::native()).unwrap();
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("never_read.bin");
    let input = input.to_str().unwrap();

    let cases = [
        vec![],
        vec![input],
        vec![input, "b", "c"],
        vec!["--help"],
        vec!["--", input, "out.bin"],
    ];
    for args in cases {
        let out = hexrefine().args(&args).current_dir(dir.path()).output().unwrap();
        assert!(!out.status.success(), "args {args:?}");
        let stderr = String::from_utf8(out.stderr).unwrap();
        assert_eq!(stderr.trim_end(), "Usage: hexrefine [input] [output]");
    }
    // nothing was created in the scratch dir
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn refines_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.bin");
    write_box(&input, [2, 3, 2]);

    let status = hexrefine().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());

    let refined = read_hex_mesh(&output, Endian::native()).unwrap();
    assert_eq!(refined.nodes.extents(), [3, 5, 3]);
    assert_eq!(refined.cells.len(), 2 * 4 * 2);
    assert_eq!(refined.nodes.xyz(1, 3, 1), [0.5, 3.0, 1.5]);
}

#[test]
fn hyphenated_paths_are_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_box(&dir.path().join("-in.bin"), [2, 2, 2]);

    let status = hexrefine()
        .args(["-in.bin", "--out.bin"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let refined = read_hex_mesh(dir.path().join("--out.bin"), Endian::native()).unwrap();
    assert_eq!(refined.nodes.extents(), [3, 3, 3]);
    assert_eq!(refined.cells.len(), 8);
}

#[test]
fn degenerate_axis_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.bin");
    let output = dir.path().join("out.bin");
    write_box(&input, [2, 2, 1]);

    let status = hexrefine().arg(&input).arg(&output).status().unwrap();
    assert!(!status.success());
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.bin");
    let status = hexrefine()
        .arg(dir.path().join("missing.bin"))
        .arg(&output)
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!output.exists());
}
