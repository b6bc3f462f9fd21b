pub mod deque;
pub mod stack;
