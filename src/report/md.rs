use crate::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Reputation Score Report\n\n");
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));
    output.push_str(&format!(
        "Credentials: {} loaded, {} malformed skipped\n\nIdentities: {}\n\nDiagnostics: {} error(s), {} warning(s)\n\n",
        report.credential_count,
        report.malformed_count,
        report.identity_count,
        report.error_count,
        report.warning_count
    ));

    output.push_str("## Scores\n\n");
    if report.scores.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for (identity, entry) in &report.scores {
        output.push_str(&format!("### {identity}\n\n"));

        if let Some(block) = &entry.citizen {
            output.push_str(&format!(
                "- citizen: {:.3} ({} credential(s))\n",
                block.point,
                block.credentials.len()
            ));
        }
        if let Some(block) = &entry.builder {
            output.push_str(&format!(
                "- builder: {:.3} ({} credential(s))\n",
                block.point,
                block.credentials.len()
            ));
        }
        if let Some(subs) = &entry.staker {
            for (sub_role, block) in subs {
                output.push_str(&format!(
                    "- staker/{sub_role}: {:.3} ({} credential(s))\n",
                    block.point,
                    block.credentials.len()
                ));
            }
        }
        if entry.citizen.is_none() && entry.builder.is_none() && entry.staker.is_none() {
            output.push_str("- no scored domains\n");
        }

        output.push('\n');
    }

    output
}
