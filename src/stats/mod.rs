//! Pure reductions over records already fetched from the store. No I/O;
//! staleness relative to concurrent edits is acceptable for these
//! read-mostly summaries.

use crate::models::{CompanyAggregate, Program, ProgramSummary, Report, Severity, UserStats, NO_BOUNTY};
use crate::utils::currency::{format_millions, parse_amount};

/// Derives the initials logo from a company name: first two characters,
/// upper-cased.
pub fn logo_initials(company: &str) -> String {
    company.chars().take(2).collect::<String>().to_uppercase()
}

/// Derives a company page view from the company's program rows.
///
/// Sums each program's paid label and critical count; order of the input
/// never affects the result. An empty slice yields a zeroed aggregate.
pub fn aggregate_company(name: &str, programs: &[Program]) -> CompanyAggregate {
    let total_paid: f64 = programs.iter().map(|p| parse_amount(&p.total_paid)).sum();
    let critical_vulns: i64 = programs.iter().map(|p| p.critical_vulns).sum();

    let description = programs
        .first()
        .map(|p| p.description.clone())
        .unwrap_or_default();
    let logo = programs
        .first()
        .map(|p| p.logo.clone())
        .unwrap_or_else(|| logo_initials(name));

    CompanyAggregate {
        name: name.to_string(),
        description,
        logo,
        total_paid: format_millions(total_paid),
        critical_vulns,
        active_programs_count: programs.len(),
        programs: programs
            .iter()
            .map(|p| ProgramSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                description: p.description.clone(),
                bounty_range: p.bounty_range.clone(),
            })
            .collect(),
    }
}

/// Derives a researcher's profile statistics from their report rows.
/// Reports still carrying the "N/A" sentinel contribute nothing to the
/// bounty total.
pub fn aggregate_user(reports: &[Report]) -> UserStats {
    let mut stats = UserStats {
        reports_count: reports.len(),
        ..Default::default()
    };
    for report in reports {
        if report.bounty != NO_BOUNTY {
            stats.bounties_earned += parse_amount(&report.bounty);
        }
        if report.severity == Severity::Critical {
            stats.critical_findings += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;

    fn make_program(name: &str, total_paid: &str, critical: i64) -> Program {
        Program {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            company: "Acme Corp".to_string(),
            description: "Web assets".to_string(),
            logo: "AC".to_string(),
            bounty_range: "$100 - $10000".to_string(),
            min_bounty: 100.0,
            max_bounty: 10000.0,
            vulnerability_types: vec!["XSS".to_string()],
            scope: vec!["*.acme.com".to_string()],
            reports_count: 0,
            resolved_count: 0,
            researchers_count: 0,
            total_paid: total_paid.to_string(),
            critical_vulns: critical,
            average_time: "N/A".to_string(),
            rating: 4.5,
            status: "active".to_string(),
            is_new: false,
            launched_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn make_report(severity: Severity, bounty: &str) -> Report {
        Report {
            id: uuid::Uuid::new_v4().to_string(),
            title: "Stored XSS".to_string(),
            program_name: "Acme Web".to_string(),
            severity,
            status: ReportStatus::Pending,
            reporter_name: "nullbyte".to_string(),
            reporter_uid: "uid-1".to_string(),
            submitted_at: "2024-05-01T12:00:00Z".to_string(),
            last_activity: "2024-05-01T12:00:00Z".to_string(),
            cvss_score: None,
            weakness: None,
            vulnerable_url: "https://acme.com/search".to_string(),
            description: "desc".to_string(),
            steps_to_reproduce: "steps".to_string(),
            proof_of_concept: None,
            impact_assessment: None,
            suggested_fix: None,
            bounty: bounty.to_string(),
        }
    }

    #[test]
    fn test_aggregate_company_sums_paid_labels() {
        let programs = vec![
            make_program("Web", "$1.2M", 3),
            make_program("Mobile", "$500K", 1),
            make_program("API", "$300K", 0),
        ];
        let agg = aggregate_company("Acme Corp", &programs);
        assert_eq!(agg.total_paid, "$2.0M");
        assert_eq!(agg.critical_vulns, 4);
        assert_eq!(agg.active_programs_count, 3);
        assert_eq!(agg.programs.len(), 3);
    }

    #[test]
    fn test_aggregate_company_order_independent() {
        let mut programs = vec![
            make_program("A", "$1.5M", 2),
            make_program("B", "$250K", 5),
            make_program("C", "garbage", 1),
        ];
        let forward = aggregate_company("Acme Corp", &programs);
        programs.reverse();
        let backward = aggregate_company("Acme Corp", &programs);
        assert_eq!(forward.total_paid, backward.total_paid);
        assert_eq!(forward.critical_vulns, backward.critical_vulns);
    }

    #[test]
    fn test_aggregate_company_empty() {
        let agg = aggregate_company("fresh startup", &[]);
        assert_eq!(agg.total_paid, "$0.0M");
        assert_eq!(agg.critical_vulns, 0);
        assert_eq!(agg.active_programs_count, 0);
        assert_eq!(agg.logo, "FR");
        assert!(agg.programs.is_empty());
    }

    #[test]
    fn test_aggregate_company_malformed_label_degrades_to_zero() {
        let programs = vec![
            make_program("A", "$1.0M", 0),
            make_program("B", "unknown", 0),
        ];
        let agg = aggregate_company("Acme Corp", &programs);
        assert_eq!(agg.total_paid, "$1.0M");
    }

    #[test]
    fn test_aggregate_user_empty() {
        let stats = aggregate_user(&[]);
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_aggregate_user_skips_sentinel_and_counts_critical() {
        let reports = vec![
            make_report(Severity::Critical, "$2,000"),
            make_report(Severity::Critical, NO_BOUNTY),
            make_report(Severity::Low, "$500"),
        ];
        let stats = aggregate_user(&reports);
        assert_eq!(stats.reports_count, 3);
        assert_eq!(stats.bounties_earned, 2500.0);
        assert_eq!(stats.critical_findings, 2);
    }

    #[test]
    fn test_logo_initials() {
        assert_eq!(logo_initials("acme corp"), "AC");
        assert_eq!(logo_initials("x"), "X");
    }
}
