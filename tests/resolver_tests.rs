//! Nearest-project resolution over constructed candidate sets
//!
//! The resolver is a pure function over paths; these tests pin the
//! containment and tie-break rules without touching the filesystem.

use std::path::{Path, PathBuf};

use scaffora::{nearest_project_file, ProjectFile};

fn candidates(paths: &[&str]) -> Vec<ProjectFile> {
    paths
        .iter()
        .map(|p| ProjectFile::new(PathBuf::from(p)))
        .collect()
}

#[test]
fn single_candidate_owning_the_target_wins() {
    let projects = candidates(&["/src/dir/example.csproj"]);

    let result = nearest_project_file(&projects, Path::new("/src/dir/subdir/subdir2/example.cs"));

    assert_eq!(result, Some(&projects[0]));
}

#[test]
fn deeper_of_two_enclosing_projects_wins() {
    let projects = candidates(&["/src/app.csproj", "/src/modules/auth/auth.csproj"]);

    let result = nearest_project_file(
        &projects,
        Path::new("/src/modules/auth/Handlers/Login.cs"),
    );

    assert_eq!(result, Some(&projects[1]));

    // Order of discovery must not matter for the deeper-wins rule
    let reversed = candidates(&["/src/modules/auth/auth.csproj", "/src/app.csproj"]);
    let result = nearest_project_file(
        &reversed,
        Path::new("/src/modules/auth/Handlers/Login.cs"),
    );
    assert_eq!(result, Some(&reversed[0]));
}

#[test]
fn project_below_the_target_never_matches() {
    let projects = candidates(&["/src/dir/subdir/example.csproj"]);

    let result = nearest_project_file(&projects, Path::new("/src/dir/example.cs"));

    assert_eq!(result, None);
}

#[test]
fn shared_string_prefix_without_path_prefix_never_matches() {
    // "/src/dir" vs target under "/src/dir2": long common substring, no
    // containment.
    let projects = candidates(&["/src/dir/example.csproj"]);

    let result = nearest_project_file(&projects, Path::new("/src/dir2/example.cs"));

    assert_eq!(result, None);
}

#[test]
fn target_equal_to_project_dir_wins_outright() {
    let projects = candidates(&[
        "/src/example.csproj",
        "/src/dir/example.csproj",
    ]);

    let result = nearest_project_file(&projects, Path::new("/src/dir"));

    assert_eq!(result, Some(&projects[1]));
}

#[test]
fn empty_candidate_set_resolves_to_none() {
    let projects = candidates(&[]);

    let result = nearest_project_file(&projects, Path::new("/src/dir/example.cs"));

    assert_eq!(result, None);
}

#[test]
fn equal_candidates_keep_insertion_order() {
    let projects = candidates(&["/src/dir/a.csproj", "/src/dir/b.csproj"]);

    let result = nearest_project_file(&projects, Path::new("/src/dir/example.cs"));

    assert_eq!(result, Some(&projects[0]));
}

#[test]
fn unrelated_candidates_do_not_displace_the_owner() {
    let projects = candidates(&[
        "/elsewhere/deep/nested/far/away/x.csproj",
        "/src/dir/example.csproj",
        "/other/y.csproj",
    ]);

    let result = nearest_project_file(&projects, Path::new("/src/dir/Models/Customer.cs"));

    assert_eq!(result, Some(&projects[1]));
}
