//! CSS structure for **gradease**: a span-preserving stylesheet parser and
//! the gradient argument tokenizer.
//!
//! This crate is intentionally dependency-free. It knows how CSS text is
//! shaped, nothing about colors or easing math.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Stylesheet`, `Node`, `Declaration`, keyframes-aware walk |
//! | [`error`] | `ParseError` |
//! | [`gradient`] | `find_gradients`, `split_args`, `GradientArgs` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_stylesheet` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use gradease_syntax::{find_gradients, parse_stylesheet};
//!
//! let src = "a { background: linear-gradient(to right, green, ease, red); }";
//! let sheet = parse_stylesheet(src).unwrap();
//! let decl = sheet.declarations()[0].declaration;
//!
//! let calls = find_gradients(&decl.value);
//! assert_eq!(&decl.value[calls[0].args_span.clone()], "to right, green, ease, red");
//! ```

pub mod ast;
pub mod error;
pub mod gradient;
pub mod lexer;
pub mod parser;

pub use ast::{DeclarationRef, Stylesheet};
pub use error::ParseError;
pub use gradient::{find_gradients, GradientArgs, GradientCall, GradientKind};
pub use parser::parse_stylesheet;
