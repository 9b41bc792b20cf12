//! Scaffolding flow: template lookup, rendering, file creation

use scaffora::{
    available_templates, find_template, nearest_project_file, resolve_namespace, scaffold_file,
    NamespaceOptions,
};

mod common;

use common::TestRepo;

#[test]
fn scaffolds_a_class_with_the_inferred_namespace() {
    let repo = TestRepo::new();
    repo.add_project("Shop.csproj").add_dir("Models");

    let projects = scaffora::find_project_files(&repo.path(), &[]);
    let target_dir = repo.join("Models");
    let project = nearest_project_file(&projects, &target_dir.join("Customer.cs")).unwrap();
    let namespace = resolve_namespace(
        project,
        &target_dir,
        NamespaceOptions {
            use_neighbors: false,
            include_subdirs: true,
        },
    )
    .unwrap();

    let templates = available_templates(None).unwrap();
    let template = find_template(&templates, "Class").unwrap();

    let created = scaffold_file(&target_dir, "Customer", template, Some(&namespace)).unwrap();

    assert_eq!(created.path, target_dir.join("Customer.cs"));
    let content = std::fs::read_to_string(&created.path).unwrap();
    assert!(content.contains("namespace Shop.Models;"));
    assert!(content.contains("public class Customer"));
    assert!(!content.contains("${"));
}

#[test]
fn scaffolds_without_a_namespace_when_disabled() {
    let repo = TestRepo::new();
    repo.add_dir("Models");

    let templates = available_templates(None).unwrap();
    let template = find_template(&templates, "Interface").unwrap();

    let created = scaffold_file(&repo.join("Models"), "IRepository", template, None).unwrap();

    let content = std::fs::read_to_string(&created.path).unwrap();
    assert!(content.contains("public interface IRepository"));
    assert!(!content.contains("namespace"));
    assert!(!content.contains("${"));
}

#[test]
fn refuses_to_overwrite_an_existing_file() {
    let repo = TestRepo::new();
    repo.add_file("Models/Customer.cs", "do not touch");

    let templates = available_templates(None).unwrap();
    let template = find_template(&templates, "Class").unwrap();

    let result = scaffold_file(&repo.join("Models"), "Customer", template, Some("Ns"));

    assert!(matches!(
        result,
        Err(scaffora::ScafforaError::FileExists { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(repo.join("Models/Customer.cs")).unwrap(),
        "do not touch"
    );
}

#[test]
fn rejects_names_with_illegal_characters() {
    let repo = TestRepo::new();
    repo.add_dir("Models");

    let templates = available_templates(None).unwrap();
    let template = find_template(&templates, "Class").unwrap();

    for bad in ["My Customer", "Customer!", "a/b", ""] {
        let result = scaffold_file(&repo.join("Models"), bad, template, None);
        assert!(
            matches!(result, Err(scaffora::ScafforaError::InvalidFileName { .. })),
            "{:?} should be rejected",
            bad
        );
    }

    // Nothing was written along the way
    assert_eq!(std::fs::read_dir(repo.join("Models")).unwrap().count(), 0);
}

#[test]
fn user_templates_extend_and_override_builtins() {
    let repo = TestRepo::new();
    repo.add_file(
        "templates/1 Service.cs",
        "namespace ${namespace};\n\npublic class ${name}Service\n{\n}\n",
    )
    .add_file("templates/Class.cs", "// custom\npublic class ${name} {}\n");

    let templates = available_templates(Some(&repo.join("templates"))).unwrap();

    let service = find_template(&templates, "Service").expect("user template listed");
    assert!(!service.builtin);

    let class = find_template(&templates, "Class").expect("Class still present");
    assert!(!class.builtin, "user Class should shadow the built-in");
    assert!(class.content.starts_with("// custom"));
}

#[test]
fn every_builtin_template_renders_cleanly() {
    let repo = TestRepo::new();
    repo.add_dir("out");

    let templates = available_templates(None).unwrap();

    for template in &templates {
        let name = format!("Sample{}", template.label);
        let created =
            scaffold_file(&repo.join("out"), &name, template, Some("Sample.Ns")).unwrap();
        let content = std::fs::read_to_string(&created.path).unwrap();
        assert!(
            !content.contains("${"),
            "template {} left a placeholder behind",
            template.label
        );
        assert!(content.contains(&name));
    }
}
