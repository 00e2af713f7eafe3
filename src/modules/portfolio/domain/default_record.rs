use super::entities::{
    About, ContactCopy, Experience, Highlight, PortfolioRecord, Profile, Project, Seo,
    SkillCategory, SkillItem,
};

fn skill(name: &str, level: u8) -> SkillItem {
    SkillItem {
        name: name.to_string(),
        level,
    }
}

fn category(title: &str, skills: Vec<SkillItem>) -> SkillCategory {
    SkillCategory {
        title: title.to_string(),
        skills,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The record the store seeds on first read when nothing has been saved
/// yet. Every section is present so a fresh deployment renders a complete
/// page before the owner has edited anything.
pub fn default_record() -> PortfolioRecord {
    PortfolioRecord {
        profile: Some(Profile {
            name: Some("Shady Yasser".to_string()),
            title: Some("DevOps Engineer".to_string()),
            tagline: Some(
                "Specializing in cloud infrastructure, CI/CD pipelines, and automation. \
                 I build scalable systems that empower development teams to ship faster \
                 and more reliably."
                    .to_string(),
            ),
            bio: Some(
                "I'm a passionate DevOps Engineer with a strong focus on building and \
                 maintaining scalable cloud infrastructure."
                    .to_string(),
            ),
            email: Some("shady.yasser@example.com".to_string()),
            phone: Some("+1 (555) 123-4567".to_string()),
            location: Some("Available for Remote Work".to_string()),
            github: Some("https://github.com".to_string()),
            linkedin: Some("https://linkedin.com".to_string()),
            twitter: Some("https://twitter.com".to_string()),
            photo_url: Some(String::new()),
            resume_url: Some(String::new()),
        }),
        about: Some(About {
            paragraphs: strings(&[
                "I'm a passionate DevOps Engineer with a strong focus on building and \
                 maintaining scalable cloud infrastructure. My journey in tech has been \
                 driven by a love for automation and solving complex infrastructure \
                 challenges.",
                "With extensive experience in cloud platforms, containerization, and \
                 CI/CD pipelines, I help teams streamline their development workflows \
                 and achieve continuous deployment with confidence.",
                "I believe in Infrastructure as Code, security best practices, and \
                 building systems that are not just functional, but elegant and \
                 maintainable.",
            ]),
            highlights: vec![
                Highlight {
                    icon: "Cloud".to_string(),
                    title: "Cloud Infrastructure".to_string(),
                    desc: "AWS, Azure, GCP expertise".to_string(),
                },
                Highlight {
                    icon: "Server".to_string(),
                    title: "Container Orchestration".to_string(),
                    desc: "Docker & Kubernetes".to_string(),
                },
                Highlight {
                    icon: "Code2".to_string(),
                    title: "Infrastructure as Code".to_string(),
                    desc: "Terraform, Ansible, CloudFormation".to_string(),
                },
                Highlight {
                    icon: "Zap".to_string(),
                    title: "CI/CD Automation".to_string(),
                    desc: "Jenkins, GitLab CI, GitHub Actions".to_string(),
                },
            ],
        }),
        skills: Some(vec![
            category(
                "Cloud Platforms",
                vec![
                    skill("AWS", 95),
                    skill("Azure", 85),
                    skill("Google Cloud", 80),
                    skill("DigitalOcean", 90),
                ],
            ),
            category(
                "Container & Orchestration",
                vec![
                    skill("Docker", 95),
                    skill("Kubernetes", 90),
                    skill("Helm", 85),
                    skill("Docker Compose", 95),
                ],
            ),
            category(
                "CI/CD Tools",
                vec![
                    skill("Jenkins", 90),
                    skill("GitLab CI", 95),
                    skill("GitHub Actions", 90),
                    skill("ArgoCD", 85),
                ],
            ),
            category(
                "Infrastructure as Code",
                vec![
                    skill("Terraform", 95),
                    skill("Ansible", 90),
                    skill("CloudFormation", 85),
                    skill("Pulumi", 75),
                ],
            ),
            category(
                "Monitoring & Logging",
                vec![
                    skill("Prometheus", 90),
                    skill("Grafana", 90),
                    skill("ELK Stack", 85),
                    skill("Datadog", 80),
                ],
            ),
            category(
                "Programming & Scripting",
                vec![
                    skill("Python", 90),
                    skill("Bash", 95),
                    skill("Go", 75),
                    skill("PowerShell", 80),
                ],
            ),
        ]),
        projects: Some(vec![
            Project {
                title: "Kubernetes Multi-Cloud Cluster".to_string(),
                description: "Built and managed a production-grade Kubernetes cluster \
                              across AWS and GCP, implementing auto-scaling, monitoring, \
                              and disaster recovery."
                    .to_string(),
                tech: strings(&["Kubernetes", "Terraform", "Prometheus", "Grafana", "Helm"]),
                icon: "Server".to_string(),
                gradient: "from-cyan-400 to-blue-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
            Project {
                title: "CI/CD Pipeline Automation".to_string(),
                description: "Designed and implemented end-to-end CI/CD pipelines \
                              reducing deployment time by 70% and enabling daily \
                              releases with zero downtime."
                    .to_string(),
                tech: strings(&["Jenkins", "GitLab CI", "Docker", "ArgoCD", "SonarQube"]),
                icon: "Cloud".to_string(),
                gradient: "from-blue-400 to-purple-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
            Project {
                title: "Infrastructure as Code Framework".to_string(),
                description: "Created reusable Terraform modules for AWS infrastructure, \
                              enabling teams to provision environments in minutes with \
                              consistent security policies."
                    .to_string(),
                tech: strings(&["Terraform", "AWS", "Python", "Ansible", "Vault"]),
                icon: "Database".to_string(),
                gradient: "from-purple-400 to-pink-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
            Project {
                title: "Observability Stack Implementation".to_string(),
                description: "Deployed comprehensive monitoring solution with Prometheus, \
                              Grafana, and ELK stack, providing real-time insights across \
                              50+ microservices."
                    .to_string(),
                tech: strings(&[
                    "Prometheus",
                    "Grafana",
                    "Elasticsearch",
                    "Kibana",
                    "Fluentd",
                ]),
                icon: "Server".to_string(),
                gradient: "from-pink-400 to-red-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
            Project {
                title: "Security Hardening Automation".to_string(),
                description: "Automated security compliance checks and vulnerability \
                              scanning in CI/CD pipeline, improving security posture \
                              by 85%."
                    .to_string(),
                tech: strings(&["Trivy", "OWASP", "Vault", "AWS Security Hub", "Python"]),
                icon: "Cloud".to_string(),
                gradient: "from-green-400 to-cyan-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
            Project {
                title: "Cloud Cost Optimization".to_string(),
                description: "Implemented automated cost optimization strategies across \
                              multi-cloud infrastructure, reducing monthly cloud spend \
                              by 45%."
                    .to_string(),
                tech: strings(&[
                    "AWS Cost Explorer",
                    "Terraform",
                    "Python",
                    "Lambda",
                    "CloudWatch",
                ]),
                icon: "Database".to_string(),
                gradient: "from-yellow-400 to-orange-500".to_string(),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
            },
        ]),
        experiences: Some(vec![
            Experience {
                title: "Senior DevOps Engineer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                location: "Remote".to_string(),
                period: "2022 - Present".to_string(),
                achievements: strings(&[
                    "Led migration of monolithic applications to microservices \
                     architecture on Kubernetes",
                    "Reduced deployment time by 70% through CI/CD pipeline optimization",
                    "Implemented comprehensive monitoring and alerting system across \
                     all environments",
                    "Mentored junior engineers on DevOps best practices and cloud \
                     technologies",
                ]),
            },
            Experience {
                title: "DevOps Engineer".to_string(),
                company: "Cloud Innovations Ltd.".to_string(),
                location: "Hybrid".to_string(),
                period: "2020 - 2022".to_string(),
                achievements: strings(&[
                    "Designed and deployed AWS infrastructure using Terraform and \
                     CloudFormation",
                    "Automated infrastructure provisioning reducing setup time from \
                     days to hours",
                    "Implemented security best practices including secrets management \
                     with Vault",
                    "Managed multi-environment Kubernetes clusters serving 2M+ daily \
                     users",
                ]),
            },
            Experience {
                title: "Junior DevOps Engineer".to_string(),
                company: "StartUp Tech".to_string(),
                location: "On-site".to_string(),
                period: "2019 - 2020".to_string(),
                achievements: strings(&[
                    "Built and maintained CI/CD pipelines using Jenkins and GitLab CI",
                    "Automated deployment processes for multiple microservices",
                    "Collaborated with development teams to optimize application \
                     performance",
                    "Implemented logging and monitoring solutions using ELK stack",
                ]),
            },
        ]),
        certifications: Some(strings(&[
            "AWS Certified Solutions Architect - Professional",
            "Certified Kubernetes Administrator (CKA)",
            "HashiCorp Certified: Terraform Associate",
            "Google Cloud Professional Cloud Architect",
        ])),
        contact: Some(ContactCopy {
            intro_title: "Get In Touch".to_string(),
            intro_text: "I'm always open to discussing new projects, creative ideas, or \
                         opportunities to be part of your vision. Feel free to reach out!"
                .to_string(),
            form_title: "Send a Message".to_string(),
        }),
        seo: Some(Seo {
            title: "Shady Yasser - DevOps Engineer Portfolio".to_string(),
            description: "DevOps Engineer specializing in cloud infrastructure, CI/CD \
                          pipelines, and automation. Expert in AWS, Azure, Kubernetes, \
                          Docker, Terraform, and more."
                .to_string(),
            keywords: "DevOps Engineer, Cloud Infrastructure, AWS, Azure, Kubernetes, \
                       Docker, CI/CD, Terraform, Ansible, Jenkins, GitLab CI, GitHub \
                       Actions, Infrastructure as Code, Portfolio, Shady Yasser"
                .to_string(),
            og_image: String::new(),
        }),
    }
}
