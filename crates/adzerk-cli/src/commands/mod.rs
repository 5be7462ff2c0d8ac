/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

pub mod campaign;
pub mod resource;

use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// How records are written to stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
  pub json: bool,
}

impl Output {
  pub fn records<T: Serialize + Display>(&self, records: &[T]) -> Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
      println!("(none)");
    } else {
      for record in records {
        println!("{}", record);
      }
    }
    Ok(())
  }

  pub fn record<T: Serialize + Display>(&self, record: &T) -> Result<()> {
    if self.json {
      println!("{}", serde_json::to_string_pretty(record)?);
    } else {
      println!("{}", record);
    }
    Ok(())
  }
}
