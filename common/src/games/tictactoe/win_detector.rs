use super::types::{CELL_COUNT, Mark, WinningLine};

/// Rows, then columns, then the two diagonals. Scan order is part of the
/// contract: the first completed line is the one reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Option<Mark>; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Option<Mark>; CELL_COUNT]) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a]?;
        if cells[b] == Some(mark) && cells[c] == Some(mark) {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

/// Empty cell that would complete a line already holding two of `mark`.
pub fn find_completing_cell(cells: &[Option<Mark>; CELL_COUNT], mark: Mark) -> Option<usize> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| cells[i] == Some(mark)).count();
        let empty = line.iter().copied().find(|&i| cells[i].is_none());
        match (owned, empty) {
            (2, Some(index)) => Some(index),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Option<Mark> = None;
    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut cells = [E; CELL_COUNT];
            for i in line {
                cells[i] = O;
            }
            assert_eq!(check_win(&cells), Some(Mark::O), "line {:?}", line);
            assert_eq!(check_win_with_line(&cells).unwrap().cells, line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        #[rustfmt::skip]
        let cells = [
            X, O, X,
            E, E, E,
            E, E, E,
        ];

        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        #[rustfmt::skip]
        let cells = [
            X, X, X,
            X, O, O,
            X, O, O,
        ];

        assert_eq!(check_win_with_line(&cells).unwrap().cells, [0, 1, 2]);
    }

    #[test]
    fn test_find_completing_cell_needs_two_and_an_empty() {
        #[rustfmt::skip]
        let cells = [
            X, E, X,
            O, O, X,
            E, E, E,
        ];

        assert_eq!(find_completing_cell(&cells, Mark::X), Some(1));
        assert_eq!(find_completing_cell(&cells, Mark::O), None);
    }
}
