use crate::style::Style;

/// Anything that can stand in a fragment list: a style, an optional
/// style, or a reference to either.
pub trait StyleFragment {
    fn fragment(&self) -> Option<&Style>;
}

impl StyleFragment for Style {
    fn fragment(&self) -> Option<&Style> {
        Some(self)
    }
}

impl<T: StyleFragment> StyleFragment for Option<T> {
    fn fragment(&self) -> Option<&Style> {
        self.as_ref().and_then(StyleFragment::fragment)
    }
}

impl<T: StyleFragment + ?Sized> StyleFragment for &T {
    fn fragment(&self) -> Option<&Style> {
        (**self).fragment()
    }
}

/// Merges fragments left to right into one style.
///
/// Absent fragments are skipped and later fields win. No fragment is
/// modified, and an empty list resolves to the empty style.
pub fn resolve_style<'a, I>(fragments: I) -> Style
where
    I: IntoIterator<Item = Option<&'a Style>>,
{
    fragments
        .into_iter()
        .flatten()
        .fold(Style::default(), |mut resolved, fragment| {
            resolved.merge(fragment);
            resolved
        })
}

/// Resolves a fragment list written inline.
///
/// Each item is any [`StyleFragment`]. An item written `condition =>
/// fragment` only contributes when `condition` is true.
///
/// ```ignore
/// let style = resolve_styles![
///     base,
///     is_disabled => disabled_style,
///     caller_style,
/// ];
/// ```
#[macro_export]
macro_rules! resolve_styles {
    (@munch []) => {
        $crate::style::Style::default()
    };

    (@munch [ $( $out:expr ),* ]) => {
        $crate::style::resolve_style([ $( $out ),* ])
    };

    (@munch [ $( $out:expr ),* ] $cond:expr => $fragment:expr $( , $( $rest:tt )* )? ) => {
        $crate::resolve_styles!(
            @munch [
                $( $out, )*
                $crate::style::StyleFragment::fragment(&$fragment).filter(|_| $cond)
            ]
            $( $( $rest )* )?
        )
    };

    (@munch [ $( $out:expr ),* ] $fragment:expr $( , $( $rest:tt )* )? ) => {
        $crate::resolve_styles!(
            @munch [
                $( $out, )*
                $crate::style::StyleFragment::fragment(&$fragment)
            ]
            $( $( $rest )* )?
        )
    };

    ( $( $rest:tt )* ) => {
        $crate::resolve_styles!(@munch [] $( $rest )*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::rgb_hex;
    use gpui::px;

    #[test]
    fn test_empty_list_is_empty_style() {
        assert!(resolve_style(Vec::<Option<&Style>>::new()).is_empty());
        assert!(resolve_styles![].is_empty());
    }

    #[test]
    fn test_later_fragments_win_and_absent_are_skipped() {
        let first = Style::new().opacity(1.);
        let second = Style::new().opacity(2.).rounded(px(3.));

        let resolved = resolve_style([None, None, Some(&first), None, Some(&second)]);
        assert_eq!(resolved, Style::new().opacity(2.).rounded(px(3.)));
    }

    #[test]
    fn test_resolution_is_pure() {
        let first = Style::new().opacity(1.).bg(rgb_hex(0xFF0000));
        let second = Style::new().opacity(0.5);

        let a = resolve_style([Some(&first), Some(&second)]);
        let b = resolve_style([Some(&first), Some(&second)]);

        assert_eq!(a, b);
        assert_eq!(first.opacity, Some(1.));
        assert_eq!(second.background, None);
    }

    #[test]
    fn test_conditional_fragments() {
        let base = Style::new().bg(rgb_hex(0x3B82F6));
        let disabled = Style::new().bg(rgb_hex(0xCCCCCC));
        let caller: Option<Style> = None;

        let enabled = resolve_styles![base, false => disabled, caller];
        assert_eq!(enabled.background, Some(rgb_hex(0x3B82F6)));

        let is_disabled = true;
        let resolved = resolve_styles![&base, is_disabled => &disabled, caller];
        assert_eq!(resolved.background, Some(rgb_hex(0xCCCCCC)));
    }

    #[test]
    fn test_inline_temporaries() {
        let resolved = resolve_styles![
            Style::new().opacity(1.).rounded(px(8.)),
            Some(Style::new().opacity(0.5)),
        ];
        assert_eq!(resolved.opacity, Some(0.5));
        assert_eq!(resolved.corner_radius, Some(px(8.)));
    }
}
