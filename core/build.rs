use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ContentFile {
    profile: ProfileEntry,
    project_kinds: Vec<KindEntry>,
    #[serde(default)]
    skills: Vec<SkillGroupEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
    projects: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
struct ProfileEntry {
    name: String,
    role: String,
    summary: String,
    location: String,
    phone: String,
    email: String,
    github: String,
    linkedin: String,
    portrait: String,
    resume_url: String,
}

#[derive(Deserialize)]
struct KindEntry {
    key: String,
    label: String,
}

#[derive(Deserialize)]
struct SkillGroupEntry {
    category: String,
    icon: String,
    items: Vec<SkillItemEntry>,
}

#[derive(Deserialize)]
struct SkillItemEntry {
    name: String,
    level: u8,
}

#[derive(Deserialize)]
struct EducationEntry {
    degree: String,
    institution: String,
    location: String,
    period: String,
    description: String,
}

#[derive(Deserialize)]
struct ProjectEntry {
    slug: String,
    title: String,
    description: String,
    image: String,
    #[serde(default)]
    stack: Vec<String>,
    kinds: Vec<String>,
    live_url: String,
    repo_url: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate_content(&content, &content_path);

    let mut output = String::new();
    write_profile(&mut output, &content.profile);
    write_kinds(&mut output, &content.project_kinds);
    write_skills(&mut output, &content.skills);
    write_education(&mut output, &content.education);
    write_projects(&mut output, &content.projects);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PORTFOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn validate_content(content: &ContentFile, content_path: &Path) {
    if content.profile.name.trim().is_empty() {
        panic!("profile name cannot be empty in {}", content_path.display());
    }

    let mut kind_keys = HashSet::new();
    for kind in &content.project_kinds {
        let key = kind.key.trim();
        if key.is_empty() {
            panic!("project kind key cannot be empty in {}", content_path.display());
        }
        if key.eq_ignore_ascii_case("all") {
            panic!(
                "project kind key 'all' is reserved in {}",
                content_path.display()
            );
        }
        if !kind_keys.insert(key.to_string()) {
            panic!(
                "duplicate project kind '{}' in {}",
                key,
                content_path.display()
            );
        }
    }

    for group in &content.skills {
        if group.items.is_empty() {
            panic!(
                "skill group '{}' has no items in {}",
                group.category,
                content_path.display()
            );
        }
        for item in &group.items {
            if item.level > 100 {
                panic!(
                    "skill '{}' has level {} above 100 in {}",
                    item.name,
                    item.level,
                    content_path.display()
                );
            }
        }
    }

    if content.projects.is_empty() {
        panic!("portfolio content {} has no projects", content_path.display());
    }

    let mut slugs = HashSet::new();
    let mut used_kinds = HashSet::new();
    for project in &content.projects {
        if project.slug.trim().is_empty() {
            panic!("project slug cannot be empty in {}", content_path.display());
        }
        if !slugs.insert(project.slug.clone()) {
            panic!(
                "duplicate project slug '{}' in {}",
                project.slug,
                content_path.display()
            );
        }
        if project.kinds.is_empty() {
            panic!(
                "project '{}' must list at least one kind in {}",
                project.slug,
                content_path.display()
            );
        }
        for kind in &project.kinds {
            if !kind_keys.contains(kind.as_str()) {
                panic!(
                    "project '{}' uses undeclared kind '{}' in {}",
                    project.slug,
                    kind,
                    content_path.display()
                );
            }
            used_kinds.insert(kind.clone());
        }
    }

    for kind in &content.project_kinds {
        if !used_kinds.contains(kind.key.trim()) {
            panic!(
                "project kind '{}' is declared but no project uses it in {}",
                kind.key,
                content_path.display()
            );
        }
    }
}

fn write_profile(output: &mut String, profile: &ProfileEntry) {
    writeln!(output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(output, "    name: {},", rust_string(&profile.name)).unwrap();
    writeln!(output, "    role: {},", rust_string(&profile.role)).unwrap();
    writeln!(output, "    summary: {},", rust_string(&profile.summary)).unwrap();
    writeln!(output, "    location: {},", rust_string(&profile.location)).unwrap();
    writeln!(output, "    phone: {},", rust_string(&profile.phone)).unwrap();
    writeln!(output, "    email: {},", rust_string(&profile.email)).unwrap();
    writeln!(output, "    github: {},", rust_string(&profile.github)).unwrap();
    writeln!(output, "    linkedin: {},", rust_string(&profile.linkedin)).unwrap();
    writeln!(output, "    portrait: {},", rust_string(&profile.portrait)).unwrap();
    writeln!(output, "    resume_url: {},", rust_string(&profile.resume_url)).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_kinds(output: &mut String, kinds: &[KindEntry]) {
    writeln!(output, "pub const PROJECT_KINDS: &[ProjectKind] = &[").unwrap();
    for kind in kinds {
        writeln!(
            output,
            "    ProjectKind {{ key: {}, label: {} }},",
            rust_string(kind.key.trim()),
            rust_string(&kind.label)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_skills(output: &mut String, groups: &[SkillGroupEntry]) {
    writeln!(output, "pub const SKILL_GROUPS: &[SkillGroup] = &[").unwrap();
    for group in groups {
        writeln!(output, "    SkillGroup {{").unwrap();
        writeln!(output, "        category: {},", rust_string(&group.category)).unwrap();
        writeln!(output, "        icon: {},", rust_string(&group.icon)).unwrap();
        writeln!(output, "        items: &[").unwrap();
        for item in &group.items {
            writeln!(
                output,
                "            SkillItem {{ name: {}, level: {} }},",
                rust_string(&item.name),
                item.level
            )
            .unwrap();
        }
        writeln!(output, "        ],").unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_education(output: &mut String, entries: &[EducationEntry]) {
    writeln!(output, "pub const EDUCATION: &[EducationItem] = &[").unwrap();
    for entry in entries {
        writeln!(output, "    EducationItem {{").unwrap();
        writeln!(output, "        degree: {},", rust_string(&entry.degree)).unwrap();
        writeln!(output, "        institution: {},", rust_string(&entry.institution)).unwrap();
        writeln!(output, "        location: {},", rust_string(&entry.location)).unwrap();
        writeln!(output, "        period: {},", rust_string(&entry.period)).unwrap();
        writeln!(output, "        description: {},", rust_string(&entry.description)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_projects(output: &mut String, projects: &[ProjectEntry]) {
    writeln!(output, "pub const PROJECTS: &[ProjectEntry] = &[").unwrap();
    for project in projects {
        let kinds: Vec<String> = project.kinds.iter().map(|kind| kind.trim().to_string()).collect();
        writeln!(output, "    ProjectEntry {{").unwrap();
        writeln!(output, "        slug: {},", rust_string(&project.slug)).unwrap();
        writeln!(output, "        title: {},", rust_string(&project.title)).unwrap();
        writeln!(output, "        description: {},", rust_string(&project.description)).unwrap();
        writeln!(output, "        image: {},", rust_string(&project.image)).unwrap();
        writeln!(output, "        stack: {},", rust_str_slice(&project.stack)).unwrap();
        writeln!(output, "        kinds: {},", rust_str_slice(&kinds)).unwrap();
        writeln!(output, "        live_url: {},", rust_string(&project.live_url)).unwrap();
        writeln!(output, "        repo_url: {},", rust_string(&project.repo_url)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
}
