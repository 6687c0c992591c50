//! 规则常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 渲染时每行下方的分隔线
pub const SEPARATOR: &str = "---------";

/// 所有连线（格子索引为 row * 3 + col）：3 行、3 列、2 条对角线
pub const WIN_LINES: [[usize; 3]; 8] = [
    // 行
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 列
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 对角线
    [0, 4, 8],
    [2, 4, 6],
];
