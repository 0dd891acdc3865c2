//! Static site content, one payload per page.

use folio_models::page::{ContentBlock, Entry, Link, NavEntry, Page, PageKey};

pub(crate) fn nav() -> Vec<NavEntry> {
    vec![
        nav_entry(PageKey::Home, "🏠", "Home"),
        nav_entry(PageKey::Skills, "🧩", "Skills"),
        nav_entry(PageKey::Projects, "📂", "Projects"),
        nav_entry(PageKey::Experience, "💼", "Experience"),
        nav_entry(PageKey::Education, "🎓", "Education"),
        nav_entry(PageKey::Contact, "✉️", "Contact"),
        nav_entry(PageKey::Message, "📝", "Get in touch"),
    ]
}

pub(crate) fn page(key: PageKey) -> Page {
    match key {
        PageKey::Home => home(),
        PageKey::Skills => skills(),
        PageKey::Projects => projects(),
        PageKey::Experience => experience(),
        PageKey::Education => education(),
        PageKey::Contact => contact(),
        PageKey::Message => message(),
    }
}

fn home() -> Page {
    Page {
        key: PageKey::Home,
        title: "Overview".into(),
        blocks: vec![
            text(
                Some("What I do"),
                "Data & ML (Python, SQL, Monte Carlo), software and backend \
                 engineering, V&V methodology with tests, documentation and \
                 user training.",
            ),
            text(
                Some("What I enjoy"),
                "Solving concrete problems, working cleanly and explaining \
                 the result, learning fast and sharing what I learn.",
            ),
            text(
                Some("What I am looking for"),
                "Data Engineer / ML Engineer or Software / Backend Engineer \
                 positions in France, on site or remote.",
            ),
        ],
    }
}

fn skills() -> Page {
    Page {
        key: PageKey::Skills,
        title: "Skills".into(),
        blocks: vec![
            tags(
                "Languages",
                &["Python", "Java", "C/C++", "JavaScript", "SQL", "PHP", "Julia", "Bash"],
            ),
            tags(
                "Frameworks & libraries",
                &["Django", "React", "TensorFlow", "PyTest", "NumPy", "Pandas", "Matplotlib"],
            ),
            tags(
                "Data / HPC",
                &["Monte Carlo methods", "CUDA", "Advanced Excel", "Git"],
            ),
            tags("Systems / Cloud", &["Linux", "Windows", "Docker", "CI/CD"]),
        ],
    }
}

fn projects() -> Page {
    Page {
        key: PageKey::Projects,
        title: "Projects".into(),
        blocks: vec![ContentBlock::Entries {
            entries: vec![
                entry(
                    "Monte Carlo uncertainty tool (Edvance)",
                    None,
                    &[
                        "Uncertainty simulation in Python using Monte Carlo methods.",
                        "Performance work through vectorization and GPU basics.",
                        "Automated tests (PyTest), documentation and user workshops.",
                        "V&V context: traceability, quality, requirements.",
                    ],
                    &["Python", "NumPy", "PyTest", "Git"],
                ),
                entry(
                    "Herbarium web app (over 6M images)",
                    None,
                    &[
                        "ETL pipeline and large-scale image storage.",
                        "Architecture, team coordination and scientific reporting.",
                        "Scaling and flow management.",
                    ],
                    &["Python", "ETL", "SQL", "Docker"],
                ),
                entry(
                    "Road closure visualization (DIRIF)",
                    None,
                    &[
                        "Data preparation, interface ergonomics and data viz.",
                        "Operational tool for field teams: filters, export, quick reads.",
                    ],
                    &["Python", "Data Viz", "UX"],
                ),
                entry(
                    "Parallel programming (C/CUDA): wave propagation",
                    None,
                    &[
                        "Wave propagation simulation (HPC).",
                        "Performance measurements comparing multi-thread and GPU runs.",
                    ],
                    &["C", "CUDA", "HPC", "Linux"],
                ),
            ],
        }],
    }
}

fn experience() -> Page {
    Page {
        key: PageKey::Experience,
        title: "Experience".into(),
        blocks: vec![ContentBlock::Entries {
            entries: vec![
                entry(
                    "2024-2025: Engineering intern, Edvance (EDF)",
                    Some(
                        "Python Monte Carlo tool, performance optimization, PyTest \
                         suites, documentation, user training, V&V.",
                    ),
                    &[],
                    &[],
                ),
                entry(
                    "2023: Developer, DIRIF",
                    Some(
                        "Road closure visualization: data, ergonomics, data viz, \
                         field reporting.",
                    ),
                    &[],
                    &[],
                ),
                entry(
                    "2022: Intern, Speakeasy",
                    Some(
                        "E-learning platform (auth, streaming, storage); full \
                         product cycle.",
                    ),
                    &[],
                    &[],
                ),
                entry(
                    "2019-2022: Tutor, Sorbonne Paris Nord",
                    Some(
                        "Tutoring for first-year maths and C programming; \
                         supervision of a second-year Java project.",
                    ),
                    &[],
                    &[],
                ),
                entry(
                    "2021-2024: Head waiter, Fratellini Caffè",
                    Some("Team coordination and operational management."),
                    &[],
                    &[],
                ),
            ],
        }],
    }
}

fn education() -> Page {
    Page {
        key: PageKey::Education,
        title: "Education".into(),
        blocks: vec![ContentBlock::Entries {
            entries: vec![
                entry(
                    "Engineering degree in Computer Science (SupGalilée), 2025",
                    Some("Final-year project, software projects, data/ML, HPC."),
                    &[],
                    &[],
                ),
                entry(
                    "Dual bachelor in Mathematics & Computer Science (Sorbonne Paris Nord), 2022",
                    Some("Algorithms, statistics, data structures, Java/C."),
                    &[],
                    &[],
                ),
            ],
        }],
    }
}

fn contact() -> Page {
    Page {
        key: PageKey::Contact,
        title: "Contact".into(),
        blocks: vec![
            text(None, "📧 syrine.chehairi@hotmail.com"),
            ContentBlock::Links {
                links: vec![
                    link("🔗 LinkedIn", "https://www.linkedin.com/in/syrine-chehairi-866099184/"),
                    link("💻 GitHub", "https://github.com/syrine291100"),
                ],
            },
        ],
    }
}

fn message() -> Page {
    Page {
        key: PageKey::Message,
        title: "Get in touch".into(),
        blocks: vec![text(
            None,
            "Fill in this form: your message is relayed by email and kept in \
             a local archive.",
        )],
    }
}

fn nav_entry(key: PageKey, emoji: &'static str, label: &'static str) -> NavEntry {
    NavEntry { key, emoji, label }
}

fn text(heading: Option<&str>, body: &str) -> ContentBlock {
    ContentBlock::Text {
        heading: heading.map(Into::into),
        body: body.into(),
    }
}

fn tags(heading: &str, tags: &[&str]) -> ContentBlock {
    ContentBlock::Tags {
        heading: heading.into(),
        tags: tags.iter().map(|tag| (*tag).into()).collect(),
    }
}

fn link(label: &str, url: &str) -> Link {
    Link {
        label: label.into(),
        url: url.into(),
    }
}

fn entry(title: &str, caption: Option<&str>, bullets: &[&str], tags: &[&str]) -> Entry {
    Entry {
        title: title.into(),
        caption: caption.map(Into::into),
        bullets: bullets.iter().map(|bullet| (*bullet).into()).collect(),
        tags: tags.iter().map(|tag| (*tag).into()).collect(),
    }
}
