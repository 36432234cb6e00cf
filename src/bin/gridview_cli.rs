//! CLI tool for gridview - builds a layout from a JSON description and answers
//! geometry queries
//!
//! Usage:
//!   gridview_cli <layout.json>                         # Print the layout summary
//!   gridview_cli <layout.json> --index-path 150,60     # Hit test a point
//!   gridview_cli <layout.json> --rect 1,1,above        # Cell rectangle
//!   gridview_cli <layout.json> --visible 20,0          # Visible cells at a scroll offset
//!   gridview_cli <layout.json> --convert 150,old.json  # Re-base an offset from another layout
//!
//! Set `RUST_LOG=gridview=debug` to trace matrix construction.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use gridview::error::{GridViewError, Result};
use gridview::layout::{ViewMatrix, Viewport};
use gridview::types::{IndexPath, Point, Threshold};
use gridview::LayoutConfig;

enum Query {
    IndexPath(Point),
    Rect(IndexPath, Threshold),
    Visible(Point),
    Convert(f32, String),
}

fn parse_f32(s: &str) -> Result<f32> {
    s.trim()
        .parse()
        .map_err(|_| GridViewError::Argument(format!("not a number: {s}")))
}

fn parse_point(arg: &str) -> Result<Point> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| GridViewError::Argument(format!("expected X,Y: {arg}")))?;
    Ok(Point::new(parse_f32(x)?, parse_f32(y)?))
}

fn parse_rect_query(arg: &str) -> Result<Query> {
    let mut parts = arg.split(',');
    let section = parts
        .next()
        .and_then(|s| s.trim().parse::<isize>().ok())
        .ok_or_else(|| GridViewError::Argument(format!("expected S,R[,threshold]: {arg}")))?;
    let row = parts
        .next()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .ok_or_else(|| GridViewError::Argument(format!("expected S,R[,threshold]: {arg}")))?;
    let threshold = match parts.next() {
        None => Threshold::In,
        Some(s) => Threshold::parse(s)
            .ok_or_else(|| GridViewError::Argument(format!("unknown threshold: {s}")))?,
    };
    Ok(Query::Rect(IndexPath::new(section, row), threshold))
}

fn parse_convert_query(arg: &str) -> Result<Query> {
    let (offset, path) = arg
        .split_once(',')
        .ok_or_else(|| GridViewError::Argument(format!("expected OFFSET,LAYOUT: {arg}")))?;
    Ok(Query::Convert(parse_f32(offset)?, path.to_string()))
}

fn parse_queries(args: &[String]) -> Result<Vec<Query>> {
    let mut queries = Vec::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| GridViewError::Argument(format!("{flag} needs a value")))?;
        let query = match flag.as_str() {
            "--index-path" => Query::IndexPath(parse_point(value)?),
            "--rect" => parse_rect_query(value)?,
            "--visible" => Query::Visible(parse_point(value)?),
            "--convert" => parse_convert_query(value)?,
            other => return Err(GridViewError::Argument(format!("unknown flag: {other}"))),
        };
        queries.push(query);
    }
    Ok(queries)
}

fn load_matrix(path: &str) -> Result<ViewMatrix> {
    let json = fs::read_to_string(path)?;
    LayoutConfig::matrix_from_json(&json)
}

fn answer(matrix: &ViewMatrix, query: &Query) -> Result<Value> {
    let value = match query {
        Query::IndexPath(point) => json!({
            "query": "indexPath",
            "point": point,
            "indexPath": matrix.index_path(*point),
        }),
        Query::Rect(index_path, threshold) => json!({
            "query": "rect",
            "indexPath": index_path,
            "threshold": threshold,
            "rect": matrix.rect(*index_path, *threshold),
        }),
        Query::Visible(point) => {
            let viewport = Viewport {
                scroll_x: point.x,
                scroll_y: point.y,
                ..Viewport::default()
            };
            json!({
                "query": "visible",
                "point": point,
                "sections": matrix.visible_sections(*point),
                "cells": viewport.visible_cells(matrix),
            })
        }
        Query::Convert(offset, path) => {
            let previous = load_matrix(path)?;
            json!({
                "query": "convert",
                "from": path,
                "offset": offset,
                "converted": matrix.convert(*offset, &previous),
            })
        }
    };
    Ok(value)
}

fn run(args: &[String]) -> Result<String> {
    let (layout_path, rest) = args
        .split_first()
        .ok_or_else(|| GridViewError::Argument("missing layout path".to_string()))?;
    let queries = parse_queries(rest)?;
    let matrix = load_matrix(layout_path)?;

    let results = queries
        .iter()
        .map(|query| answer(&matrix, query))
        .collect::<Result<Vec<_>>>()?;

    let output = json!({
        "summary": matrix.summary(),
        "results": results,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!(
            "Usage: gridview_cli <layout.json> [--index-path X,Y] [--rect S,R[,in|above|below]] \
             [--visible X,Y] [--convert OFFSET,LAYOUT]"
        );
        std::process::exit(1);
    }

    match run(&args) {
        Ok(json) => {
            let mut stdout = io::stdout();
            if writeln!(stdout, "{json}").is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "query failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
