/// Three-valued answer for questions like "do these two pieces overlap?", where `Partial`
/// means they only meet at a boundary point.
#[derive(Clone, Hash, Eq, PartialEq, Debug, Copy)]
pub enum BoolWithPartial {
    True,
    Partial,
    False,
}

impl BoolWithPartial {
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial)
    }
    pub fn is_false(&self) -> bool {
        matches!(self, Self::False)
    }
    pub fn is_at_least_partial(&self) -> bool {
        !self.is_false()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_false;

    #[test]
    fn test_at_least_partial() {
        assert!(BoolWithPartial::True.is_at_least_partial());
        assert!(BoolWithPartial::Partial.is_at_least_partial());
        assert_false!(BoolWithPartial::False.is_at_least_partial());
        assert!(BoolWithPartial::Partial.is_partial());
        assert_false!(BoolWithPartial::True.is_partial());
        assert!(BoolWithPartial::False.is_false());
    }
}
