use crate::error::{Error, Result};
use knap_engine::{ItemSet, Solution};
use log::debug;
use std::fmt::Write;

fn invalid_instance(line: usize, message: impl std::fmt::Display) -> Error {
    knap_engine::Error::InvalidInstance(format!("line {}: {}", line, message)).into()
}

fn parse_fields<const N: usize>(line_no: usize, line: &str) -> Result<[i64; N]> {
    let mut fields = [0i64; N];
    let mut parts = line.split_whitespace();
    for (i, field) in fields.iter_mut().enumerate() {
        let part = parts
            .next()
            .ok_or_else(|| invalid_instance(line_no, format!("expected {} fields, got {}", N, i)))?;
        *field = part
            .parse()
            .map_err(|_| invalid_instance(line_no, format!("'{}' is not an integer", part)))?;
    }
    Ok(fields)
}

/// Parses the `N capacity` header followed by `N` lines of `value weight`.
pub fn parse_instance(input: &str) -> Result<ItemSet> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));
    let (header_no, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or_else(|| invalid_instance(1, "missing header"))?;
    let [item_count, capacity] = parse_fields::<2>(header_no, header)?;
    if item_count < 0 {
        return Err(invalid_instance(
            header_no,
            format!("item count ({}) is negative", item_count),
        ));
    }

    let pairs = lines
        .by_ref()
        .filter(|(_, line)| !line.trim().is_empty())
        .take(item_count as usize)
        .map(|(line_no, line)| parse_fields::<2>(line_no, line).map(|[v, w]| (v, w)))
        .collect::<Result<Vec<_>>>()?;

    let trailing = lines.filter(|(_, line)| !line.trim().is_empty()).count();
    if trailing > 0 {
        debug!("ignoring {} lines after the declared items", trailing);
    }

    Ok(ItemSet::with_declared_count(
        item_count as usize,
        &pairs,
        capacity,
    )?)
}

pub fn format_instance(item_set: &ItemSet) -> String {
    let mut out = format!("{} {}\n", item_set.len(), item_set.capacity());
    for item in item_set.items() {
        let _ = writeln!(out, "{} {}", item.value, item.weight);
    }
    out
}

/// `total_value optimality_flag` then one 0/1 indicator per item.
pub fn format_solution(solution: &Solution) -> String {
    let indicators = solution
        .indicators()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {}\n{}",
        solution.total_value,
        solution.optimality_flag(),
        indicators
    )
}

/// Reads a solution written by [`format_solution`]. Totals are taken as
/// declared for the value and recomputed for the weight, so the result can be
/// checked with [`ItemSet::verify_solution`].
pub fn parse_solution(input: &str, item_set: &ItemSet) -> Result<Solution> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));
    let parse_error = |line: usize, message: String| Error::Parse { line, message };

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing header".into()))?;
    let mut parts = header.split_whitespace();
    let total_value = parts
        .next()
        .and_then(|p| p.parse::<u64>().ok())
        .ok_or_else(|| parse_error(header_no, "expected total value".into()))?;
    let is_optimal = match parts.next() {
        Some("1") => true,
        Some("0") => false,
        other => {
            return Err(parse_error(
                header_no,
                format!("expected optimality flag 0 or 1, got {:?}", other),
            ))
        }
    };

    let (line_no, line) = lines.next().unwrap_or((header_no + 1, ""));
    let taken = line
        .split_whitespace()
        .map(|p| match p {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(parse_error(line_no, format!("'{}' is not 0 or 1", p))),
        })
        .collect::<Result<Vec<bool>>>()?;

    let total_weight = taken
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t && i < item_set.len())
        .map(|(i, _)| item_set.weight(i))
        .sum();

    Ok(Solution {
        taken,
        total_value,
        total_weight,
        is_optimal,
    })
}
