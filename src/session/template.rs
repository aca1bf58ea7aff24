use crate::model::SessionParameters;

/// Hours as shown in the header, always with a fractional part (`2.0`, `1.5`).
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}

/// Fill the session log template.
///
/// Values are substituted in one pass, so text supplied by the user is never
/// treated as a placeholder.
pub fn render(params: &SessionParameters) -> String {
    format!(
        r#"# PDCA Session Log

**Session Date:** {date}
**Feature:** {feature}
**Estimated Time:** {estimated_time} hours

## Business Objective

{objective}

---

## ANALYSIS PHASE

### Approach Selected
[After analysis, document the chosen approach]

### Key Patterns Identified
[List the existing patterns we'll follow]

### Files to Modify
[List main files that will be touched]

---

## PLANNING PHASE

### Number of Steps
[X steps total]

### Checkpoints Planned
[After steps: X, Y, Z]

### Risk Flags
[Any identified risks or unknowns]

---

## IMPLEMENTATION NOTES

### Start Time
{start_time}

### Progress Log
[Track as you go - note interventions, deviations, learnings]

### Deviations from Plan
[Document when and why you deviated]

### Interventions Made
[Note when you had to redirect the AI]

### End Time
[Fill in when complete]

### Actual Duration
[Calculate total time]

---

## COMPLETION CHECK

### Status
[Complete / Needs Work]

### Tests Passing
[Yes / No - include count if available]

### Ready to Close
[Yes / No with reasoning]

### Outstanding Items
[List anything remaining]

---

## RETROSPECTIVE

### What Worked Well
[Top 2-3 things]

### What Could Be Better
[Top 2-3 improvements]

### Top Learning
[Single most valuable insight]

### Change for Next Time
[One specific action item]

### Quality Metrics
- Total commits: [#]
- Largest commit: [# lines]
- Files touched: [# files]
- Avg lines per commit: [#]
- Test-first discipline: [%]

---

## KNOWLEDGE CAPTURE

### Patterns Discovered
[Document any patterns learned about the codebase]

### Architecture Insights
[Any architectural learnings to share with team]

### Refactoring Opportunities
[Note any tech debt or improvement opportunities]

---

## PROMPT UPDATES

### Changes Made
[List any updates to prompt templates]

### Why
[Rationale for each change]

---

**Session Complete:** [Date/Time when finished]
"#,
        date = params.date_string(),
        feature = params.feature,
        estimated_time = format_hours(params.estimated_hours),
        objective = params.objective,
        start_time = params.start_time_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn params(feature: &str, objective: &str, hours: f64) -> SessionParameters {
        SessionParameters {
            feature: feature.to_string(),
            objective: objective.to_string(),
            estimated_hours: hours,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn header_carries_supplied_values() {
        let text = render(&params("JWT Auth", "Add user authentication to API", 2.0));
        let header: Vec<&str> = text.lines().take(9).collect();
        assert_eq!(
            header,
            vec![
                "# PDCA Session Log",
                "",
                "**Session Date:** 2024-03-09",
                "**Feature:** JWT Auth",
                "**Estimated Time:** 2.0 hours",
                "",
                "## Business Objective",
                "",
                "Add user authentication to API",
            ]
        );
        assert!(text.contains("### Start Time\n14:05\n"));
    }

    #[test]
    fn every_section_is_present() {
        let text = render(&params("x", "y", 1.0));
        for heading in [
            "## ANALYSIS PHASE",
            "## PLANNING PHASE",
            "## IMPLEMENTATION NOTES",
            "## COMPLETION CHECK",
            "## RETROSPECTIVE",
            "## KNOWLEDGE CAPTURE",
            "## PROMPT UPDATES",
            "**Session Complete:**",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn placeholder_text_in_values_is_not_expanded() {
        let text = render(&params("{objective}", "{date}", 3.0));
        assert!(text.contains("**Feature:** {objective}"));
        assert!(text.contains("\n{date}\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = params("Search", "Faster search", 1.5);
        assert_eq!(render(&p), render(&p));
        assert!(render(&p).contains("**Estimated Time:** 1.5 hours"));
    }

    #[test]
    fn hours_keep_a_decimal() {
        assert_eq!(format_hours(2.0), "2.0");
        assert_eq!(format_hours(0.25), "0.25");
    }
}
