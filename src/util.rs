use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`, shrunk to
/// fit if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(42, 34), Rect::new(19, 0, 42, 24))]
    #[case(Rect::new(0, 0, 80, 40), Size::new(42, 34), Rect::new(19, 3, 42, 34))]
    #[case(Rect::new(5, 2, 22, 7), Size::new(22, 7), Rect::new(5, 2, 22, 7))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(4, 2), Rect::new(3, 4, 4, 2))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
