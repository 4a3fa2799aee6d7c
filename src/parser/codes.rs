use tracing::debug;
use winnow::ascii::Caseless;
use winnow::combinator::alt;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::error::{Error, Result};
use crate::types::{FieldLayout, PhoneStyle, RevenueStyle};

const NUMBER: Option<RevenueStyle> = Some(RevenueStyle::Number);
const CURRENCY: Option<RevenueStyle> = Some(RevenueStyle::Currency);
const REVENUE_WORDS: Option<RevenueStyle> = Some(RevenueStyle::Words);
const PHONE: Option<PhoneStyle> = Some(PhoneStyle::AsStored);
const PHONE_WORDS: Option<PhoneStyle> = Some(PhoneStyle::Words);

// Longer codes come first so that a shorter prefix never shadows them.
fn record_layout(input: &mut &str) -> ModalResult<FieldLayout> {
    alt((
        literal(Caseless("NRP")).value(FieldLayout::new(true, NUMBER, PHONE)),
        literal(Caseless("NR")).value(FieldLayout::new(true, NUMBER, None)),
        literal(Caseless("NP")).value(FieldLayout::new(true, None, PHONE)),
        literal(Caseless("RP")).value(FieldLayout::new(false, NUMBER, PHONE)),
        literal(Caseless("G")).value(FieldLayout::new(true, NUMBER, PHONE)),
        literal(Caseless("N")).value(FieldLayout::new(true, None, None)),
        literal(Caseless("R")).value(FieldLayout::new(false, NUMBER, None)),
        literal(Caseless("P")).value(FieldLayout::new(false, None, PHONE)),
    ))
    .parse_next(input)
}

fn provider_layout(input: &mut &str) -> ModalResult<FieldLayout> {
    alt((
        literal(Caseless("NRCP")).value(FieldLayout::new(true, CURRENCY, PHONE)),
        literal(Caseless("NRC")).value(FieldLayout::new(true, CURRENCY, None)),
        literal(Caseless("RCP")).value(FieldLayout::new(false, CURRENCY, PHONE)),
        literal(Caseless("NPW")).value(FieldLayout::new(true, None, PHONE_WORDS)),
        literal(Caseless("NRW")).value(FieldLayout::new(true, REVENUE_WORDS, None)),
        literal(Caseless("GC")).value(FieldLayout::new(true, CURRENCY, PHONE)),
        literal(Caseless("RC")).value(FieldLayout::new(false, CURRENCY, None)),
        literal(Caseless("RW")).value(FieldLayout::new(false, REVENUE_WORDS, None)),
        literal(Caseless("PW")).value(FieldLayout::new(false, None, PHONE_WORDS)),
        literal(Caseless("W")).value(FieldLayout::new(true, REVENUE_WORDS, PHONE_WORDS)),
    ))
    .parse_next(input)
}

/// Resolve a record format code (`G`, `NRP`, `N`, `R`, `P`, `NR`, `NP`, `RP`)
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_record_code(code: &str) -> Result<FieldLayout> {
    let layout = record_layout
        .parse(code.trim())
        .map_err(|_| Error::UnsupportedFormat {
            code: code.to_string(),
        })?;
    debug!(code, ?layout, "resolved record format code");
    Ok(layout)
}

/// Resolve a provider format code (`GC`, `NRCP`, `RC`, `NRC`, `RCP`, `W`, `RW`, `PW`, `NPW`, `NRW`)
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_provider_code(code: &str) -> Result<FieldLayout> {
    let layout = provider_layout
        .parse(code.trim())
        .map_err(|_| Error::UnsupportedFormat {
            code: code.to_string(),
        })?;
    debug!(code, ?layout, "resolved provider format code");
    Ok(layout)
}
