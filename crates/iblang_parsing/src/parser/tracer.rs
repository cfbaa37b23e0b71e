//! Hooks for watching the parser work

use iblang_tokens::token::Token;
use tracing::trace;

/// Observes rule entries and token consumption of a [SyntacticParser](super::SyntacticParser).
pub trait Tracer {
    /// Called when `rule` is entered, `depth` being the length of the rule stack including it
    fn enter(&mut self, rule: &'static str, depth: usize, lookahead: &Token);

    /// Called for every token the parser consumes
    fn consume(&mut self, token: &Token);
}

/// Traces nothing
#[derive(Debug, Default, Copy, Clone)]
pub struct NoTrace;

impl Tracer for NoTrace {
    #[inline(always)]
    fn enter(&mut self, _rule: &'static str, _depth: usize, _lookahead: &Token) {}

    #[inline(always)]
    fn consume(&mut self, _token: &Token) {}
}

/// Forwards everything to `trace` events
#[derive(Debug, Default, Copy, Clone)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn enter(&mut self, rule: &'static str, depth: usize, lookahead: &Token) {
        trace!("{:width$}-> {rule} lookahead={lookahead:?}", "", width = depth * 2);
    }

    fn consume(&mut self, token: &Token) {
        trace!("consumed {token:?}");
    }
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn enter(&mut self, rule: &'static str, depth: usize, lookahead: &Token) {
        (**self).enter(rule, depth, lookahead)
    }

    fn consume(&mut self, token: &Token) {
        (**self).consume(token)
    }
}
