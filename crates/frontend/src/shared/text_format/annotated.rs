use super::LINE_BREAK;

const RISK_ALERT: &str = "⚠️ HIGH RISK ALERT:";
const CLAUSE_PREFIX: &str = "- Clause ";
const RECOMMENDATION: &str = "Recommendation: ";

const ALERT_BANNER: &str = "<div class=\"risk-alert\" style=\"margin: 1rem 0; border-left: 4px solid red; padding-left: 10px;\"><strong>HIGH RISK ALERT:</strong></div>";

/// Annotation-block rendering of clause reports.
///
/// A `- Clause X:` line opens a clause block titled `CLAUSE X`; the next
/// `Recommendation:` line is rendered muted and closes it. Blocks left open
/// at the end of the text are closed so the fragment stays balanced.
pub(super) fn render(escaped: &str) -> String {
    let mut lines = Vec::new();
    let mut clause_open = false;

    for line in escaped.split('\n') {
        let mut rendered = line.replace(RISK_ALERT, ALERT_BANNER);

        if let Some((clause_id, tail)) = clause_header(&rendered) {
            let mut block = String::new();
            if clause_open {
                block.push_str("</div>");
            }
            block.push_str(&format!(
                "<div class=\"clause-block\" style=\"margin-top: 15px;\"><strong>CLAUSE {}</strong>{}{}",
                clause_id, LINE_BREAK, tail
            ));
            rendered = block;
            clause_open = true;
        }

        if let Some(pos) = rendered.find(RECOMMENDATION) {
            let (before, recommendation) = rendered.split_at(pos);
            let mut block = format!(
                "{}<div class=\"recommendation\" style=\"color: #666; margin-top: 5px;\">{}</div>",
                before, recommendation
            );
            if clause_open {
                block.push_str("</div>");
                clause_open = false;
            }
            rendered = block;
        }

        lines.push(rendered);
    }

    let mut html = lines.join(LINE_BREAK);
    if clause_open {
        html.push_str("</div>");
    }
    html
}

/// `- Clause 4.2 (High, Score: 9/10): reason` → `("4.2 (High, Score", " 9/10): reason")`
fn clause_header(line: &str) -> Option<(&str, &str)> {
    let start = line.find(CLAUSE_PREFIX)?;
    let rest = &line[start + CLAUSE_PREFIX.len()..];
    let colon = rest.find(':')?;
    if colon == 0 {
        return None;
    }
    Some((&rest[..colon], &rest[colon + 1..]))
}
