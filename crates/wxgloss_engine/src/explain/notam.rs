//! NOTAM field order: Q-line, then items A to G.

use wxgloss_decode::{format, map_notam_body, qline};
use wxgloss_foundation::{FieldKey, FieldMeta, NotamItem, QPartKind};
use wxgloss_lexicon::tr;

use super::FieldList;
use crate::view::MessageView;

pub(super) fn explain(view: &MessageView<'_>, out: &mut FieldList<'_>) {
    let parsed = &view.message().parsed;

    if let Some(line) = parsed.q_line.as_deref() {
        explain_q_line(line, out);
    }

    for item in NotamItem::ALL {
        let raw = match item {
            NotamItem::A => parsed.a.as_deref(),
            NotamItem::B => parsed.b.as_deref(),
            NotamItem::C => parsed.c.as_deref(),
            NotamItem::D => parsed.d.as_deref(),
            NotamItem::E => parsed.e.as_deref(),
            NotamItem::F => parsed.f.as_deref(),
            NotamItem::G => parsed.g.as_deref(),
        };
        if let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            explain_item(item, raw, out);
        }
    }
}

fn explain_q_line(line: &str, out: &mut FieldList<'_>) {
    let loc = out.loc();
    let body = line.trim();
    let body = body
        .strip_prefix("Q)")
        .or_else(|| body.strip_prefix("q)"))
        .unwrap_or(body)
        .trim();
    if body.is_empty() {
        return;
    }

    let parts = qline::decode(body, out.ctx.lexicons, loc);
    let summary = match &parts {
        Some(parts) => parts
            .iter()
            .find(|part| part.key == QPartKind::QCode)
            .map(|part| part.explanation.clone())
            .unwrap_or_default(),
        None => loc.text("notam.q.opaque"),
    };
    out.push(
        FieldKey::QLineFull,
        format!("{}{}", loc.text("notam.q.tag_q"), loc.text("notam.q.part_full")),
        format!("Q) {body}"),
        tr!(loc, "notam.q.full", summary = summary),
    );

    let prefix = loc.text("fields.notam_q_prefix");
    for (index, part) in parts.into_iter().flatten().enumerate() {
        let label = format!("{prefix}{}", loc.text(&format!("notam.q.part_{}", part.key.key())));
        out.push_with_meta(
            FieldKey::QLinePart(index),
            label,
            part.raw,
            part.explanation,
            Some(FieldMeta::QPart(part.key)),
        );
    }
}

fn explain_item(item: NotamItem, raw: &str, out: &mut FieldList<'_>) {
    let loc = out.loc();
    let label = loc.text(&format!("fields.notam_{}", item.letter()));
    let (value, explanation) = match item {
        NotamItem::A => {
            let location = out.ctx.station_display(raw);
            let explanation = tr!(loc, "explain.notam.location", location = location);
            (raw.to_string(), explanation)
        }
        NotamItem::B => {
            let start = format::notam_time(raw, loc);
            let explanation = tr!(loc, "explain.notam.start", start = start);
            (start, explanation)
        }
        NotamItem::C => {
            let end = format::notam_time(raw, loc);
            let explanation = tr!(loc, "explain.notam.end", end = end);
            (end, explanation)
        }
        NotamItem::D => (raw.to_string(), format::schedule(raw, loc)),
        NotamItem::E => {
            let mapped = map_notam_body(raw, out.ctx.lexicons, loc.locale());
            let body = if mapped.is_empty() { raw.to_string() } else { mapped };
            (raw.to_string(), tr!(loc, "explain.notam.body", body = body))
        }
        NotamItem::F => (raw.to_string(), tr!(loc, "explain.notam.lower", value = raw)),
        NotamItem::G => (raw.to_string(), tr!(loc, "explain.notam.upper", value = raw)),
    };
    out.push(FieldKey::Notam(item), label, value, explanation);
}
