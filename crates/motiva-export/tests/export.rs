use jiff::civil::date;

use motiva_core::interpretations::interpretation;
use motiva_core::models::answer::{AnswerSet, Rating};
use motiva_core::models::question::question_bank;
use motiva_core::models::report::Report;
use motiva_core::scoring::compute_ranking;
use motiva_export::layout::paginate;
use motiva_export::pdf::{generate_pdf, report_filename};
use motiva_export::render::render_report;
use motiva_export::styles::PageStyles;

fn sample_report() -> Report {
    let mut answers = AnswerSet::new();
    for (i, q) in question_bank().iter().enumerate() {
        let rating = Rating::new(1 + (i % 5) as u8).expect("rating in range");
        answers.record(q.id, rating).expect("question from the bank");
    }
    Report::new("Jordan Lee", date(2026, 8, 24), compute_ranking(&answers))
}

#[test]
fn render_carries_title_participant_and_all_scores() {
    let report = sample_report();
    let rendered = render_report(&report).expect("render");

    assert!(rendered.starts_with("# Career Motivation Map"));
    assert!(rendered.contains("Prepared for Jordan Lee on August 24, 2026."));
    for score in &report.scores {
        assert!(
            rendered.contains(&format!("- {}: {}/100", score.label, score.scaled)),
            "missing score line for {}",
            score.label
        );
    }
}

#[test]
fn render_expands_primary_and_secondary_interpretations() {
    let report = sample_report();
    let rendered = render_report(&report).expect("render");

    let primary = interpretation(report.primary().expect("primary").driver);
    let secondary = interpretation(report.secondary().expect("secondary").driver);

    assert!(rendered.contains(&format!("## {}", primary.title)));
    assert!(rendered.contains(&format!("## {}", secondary.title)));
    assert!(rendered.contains(primary.seek[0]));
    assert!(rendered.contains(secondary.prompts[0]));
}

#[test]
fn full_report_lays_out_on_three_pages() {
    let report = sample_report();
    let rendered = render_report(&report).expect("render");
    let pages = paginate(&rendered, &PageStyles::default());

    // Summary page plus one page per expanded driver.
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| !p.lines.is_empty()));
}

#[test]
fn overflowing_content_splits_onto_new_pages() {
    let styles = PageStyles::default();
    let mut long = String::from("# Long report\n\n");
    for i in 0..200 {
        long.push_str(&format!("Body line number {i} with a bit of text.\n"));
    }

    let pages = paginate(&long, &styles);
    assert!(pages.len() > 1);

    let bottom = styles.page_height_mm - styles.margin_mm;
    for page in &pages {
        for line in &page.lines {
            assert!(line.y_mm > styles.margin_mm);
            assert!(line.y_mm <= bottom);
        }
    }
}

#[test]
fn rule_lines_force_page_breaks() {
    let pages = paginate("first\n---\nsecond", &PageStyles::default());
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines[0].text, "first");
    assert_eq!(pages[1].lines[0].text, "second");
}

#[test]
fn leading_rules_and_blanks_do_not_create_empty_pages() {
    let pages = paginate("---\n\n\n# Title", &PageStyles::default());
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines[0].text, "Title");
}

#[test]
fn pdf_output_is_a_pdf() {
    let report = sample_report();
    let rendered = render_report(&report).expect("render");
    let bytes = generate_pdf(&rendered, &PageStyles::default()).expect("pdf");

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1_000);
}

#[test]
fn filename_derives_from_participant_name() {
    assert_eq!(
        report_filename("Jordan Lee"),
        "Career-Motivation-Map-Jordan-Lee.pdf"
    );
    assert_eq!(
        report_filename("  Ana  María Cruz "),
        "Career-Motivation-Map-Ana-María-Cruz.pdf"
    );
    assert_eq!(report_filename(""), "Career-Motivation-Map-Sample.pdf");
    assert_eq!(report_filename("   "), "Career-Motivation-Map-Sample.pdf");
}
