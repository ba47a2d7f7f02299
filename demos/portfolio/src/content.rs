// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page content.
//!
//! Everything rendered by the demo lives here as `'static` data; the DOM is
//! built once from these tables at startup and never mutated afterwards
//! (reveal transitions only touch `transform`/`opacity`).

/// Site owner identity, shown in the hero section.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Profile {
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) email: &'static str,
    pub(crate) resume_url: &'static str,
}

/// One employment entry in the work history.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WorkExperienceEntry {
    pub(crate) role: &'static str,
    pub(crate) organization: &'static str,
    pub(crate) period: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) tags: &'static [&'static str],
}

/// One education entry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EducationEntry {
    pub(crate) institution: &'static str,
    pub(crate) credential: &'static str,
    pub(crate) period: &'static str,
}

/// One professional certification.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CertificationEntry {
    pub(crate) name: &'static str,
    pub(crate) issuer: &'static str,
    pub(crate) year: &'static str,
}

/// One portfolio project card.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectEntry {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) tags: &'static [&'static str],
    pub(crate) link: Option<&'static str>,
}

/// One external profile link, shown in the contact section.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SocialLink {
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
}

pub(crate) const PROFILE: Profile = Profile {
    name: "Maya Lindqvist",
    title: "Systems Engineer",
    tagline: "I build reliable infrastructure and the tools that keep it honest.",
    email: "maya@lindqvist.dev",
    resume_url: "/resume.pdf",
};

pub(crate) const WORK_HISTORY: &[WorkExperienceEntry] = &[
    WorkExperienceEntry {
        role: "Senior Systems Engineer",
        organization: "Fjordlight Networks",
        period: "2023 — present",
        summary: "Own the edge routing tier: fleet configuration, rollout \
                  tooling, and the telemetry pipeline behind it.",
        tags: &["Rust", "networking", "observability"],
    },
    WorkExperienceEntry {
        role: "Platform Engineer",
        organization: "Harbor Analytics",
        period: "2020 — 2023",
        summary: "Built the ingestion service that moved the batch pipeline \
                  to streaming, cutting report latency from hours to minutes.",
        tags: &["Rust", "Kafka", "PostgreSQL"],
    },
    WorkExperienceEntry {
        role: "Software Engineer",
        organization: "Brightfold",
        period: "2017 — 2020",
        summary: "Full-stack product work on a scheduling tool for clinics, \
                  later focused on backend performance.",
        tags: &["TypeScript", "Go"],
    },
];

pub(crate) const EDUCATION: &[EducationEntry] = &[EducationEntry {
    institution: "Uppsala University",
    credential: "MSc, Computer Science",
    period: "2015 — 2017",
}];

pub(crate) const CERTIFICATIONS: &[CertificationEntry] = &[
    CertificationEntry {
        name: "Certified Kubernetes Administrator",
        issuer: "CNCF",
        year: "2022",
    },
    CertificationEntry {
        name: "AWS Solutions Architect — Associate",
        issuer: "Amazon Web Services",
        year: "2021",
    },
];

pub(crate) const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "routeprobe",
        description: "Active network path monitor that renders per-hop \
                      latency heatmaps from continuous traceroute sampling.",
        tags: &["Rust", "eBPF"],
        link: Some("https://github.com/mlindqvist/routeprobe"),
    },
    ProjectEntry {
        title: "shelfdb",
        description: "Embedded log-structured key-value store written to \
                      understand compaction trade-offs from the inside.",
        tags: &["Rust", "storage"],
        link: Some("https://github.com/mlindqvist/shelfdb"),
    },
    ProjectEntry {
        title: "This site",
        description: "A single-page portfolio whose scroll-direction-aware \
                      reveal engine is a reusable Rust crate compiled to wasm.",
        tags: &["Rust", "wasm"],
        link: None,
    },
];

pub(crate) const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/mlindqvist",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/maya-lindqvist",
    },
    SocialLink {
        label: "Mastodon",
        url: "https://hachyderm.io/@mlindqvist",
    },
];
