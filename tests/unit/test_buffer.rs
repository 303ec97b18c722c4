//! Unit tests for the ring buffer
//!
//! Tests cover:
//! - FIFO ordering below capacity
//! - Overwrite-on-full eviction
//! - Full/empty flag transitions
//! - Destruction and element release

use circular_buffer::{dump_buffer, RingBuffer, RingBufferError};
use std::cell::RefCell;
use std::rc::Rc;

/// Records its id into a shared log when dropped
struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn tracked(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Tracked {
    Tracked {
        id,
        log: Rc::clone(log),
    }
}

// ============================================================================
// Ordering
// ============================================================================

mod ordering_tests {
    use super::*;

    #[test]
    fn test_fifo_below_capacity() {
        let mut rb = RingBuffer::new(8).unwrap();
        for v in 0..8 {
            rb.push(v);
        }
        let popped: Vec<_> = std::iter::from_fn(|| rb.pop()).collect();
        assert_eq!(popped, (0..8).collect::<Vec<_>>());
        assert!(rb.is_empty());
    }

    #[test]
    fn test_round_trip_single_value() {
        let mut rb = RingBuffer::new(4).unwrap();
        rb.push(String::from("x"));
        assert_eq!(rb.pop().as_deref(), Some("x"));
        assert!(rb.is_empty());
    }

    #[test]
    fn test_keeps_most_recent_capacity_elements() {
        let mut rb = RingBuffer::new(3).unwrap();
        for v in 1..=10 {
            rb.push(v);
        }
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![8, 9, 10]);
        assert_eq!(rb.pop(), Some(8));
    }

    #[test]
    fn test_scenario_put_and_get() {
        let mut rb = RingBuffer::new(5).unwrap();
        rb.push(10);
        rb.push(20);
        assert_eq!(rb.pop(), Some(10));
        rb.push(30);
        assert_eq!(rb.pop(), Some(20));
        assert_eq!(rb.pop(), Some(30));
        assert!(rb.is_empty());
    }

    #[test]
    fn test_scenario_overflow() {
        let mut rb = RingBuffer::new(5).unwrap();
        for v in [40, 50, 60, 70, 80] {
            rb.push(v);
        }
        assert!(rb.is_full());
        rb.push(10);
        assert!(rb.is_full());
        assert_eq!(
            rb.iter().copied().collect::<Vec<_>>(),
            vec![50, 60, 70, 80, 10]
        );
    }

    #[test]
    fn test_scenario_single_slot() {
        let mut rb = RingBuffer::new(1).unwrap();
        rb.push(100);
        assert!(rb.is_full());
        assert_eq!(rb.pop(), Some(100));
        assert!(rb.is_empty());
        rb.push(10);
        assert_eq!(rb.pop(), Some(10));
        assert!(rb.is_empty());
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flag_tests {
    use super::*;

    #[test]
    fn test_full_exactly_at_capacity() {
        let mut rb = RingBuffer::new(3).unwrap();
        rb.push(1);
        rb.push(2);
        assert!(!rb.is_full());
        rb.push(3);
        assert!(rb.is_full());
        assert!(!rb.is_empty());
    }

    #[test]
    fn test_any_pop_clears_full() {
        let mut rb = RingBuffer::new(3).unwrap();
        for v in 0..5 {
            rb.push(v);
        }
        assert!(rb.is_full());
        rb.pop();
        assert!(!rb.is_full());
        assert_eq!(rb.len(), 2);
    }

    #[test]
    fn test_repeated_pop_on_empty() {
        let mut rb: RingBuffer<u8> = RingBuffer::new(2).unwrap();
        rb.push(1);
        rb.pop();
        for _ in 0..5 {
            assert_eq!(rb.pop(), None);
            assert!(rb.is_empty());
            assert_eq!(rb.len(), 0);
        }
        rb.push(2);
        assert_eq!(rb.pop(), Some(2));
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        assert_eq!(
            RingBuffer::<String>::new(0).unwrap_err(),
            RingBufferError::InvalidCapacity { requested: 0 }
        );
    }
}

// ============================================================================
// Ownership
// ============================================================================

mod ownership_tests {
    use super::*;

    #[test]
    fn test_evicted_element_dropped_on_push() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rb = RingBuffer::new(2).unwrap();
        rb.push(tracked(1, &log));
        rb.push(tracked(2, &log));
        assert!(log.borrow().is_empty());

        rb.push(tracked(3, &log));
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_push_evicting_hands_element_back() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rb = RingBuffer::new(1).unwrap();
        rb.push(tracked(1, &log));

        let evicted = rb.push_evicting(tracked(2, &log)).unwrap();
        assert_eq!(evicted.id, 1);
        assert!(log.borrow().is_empty());
        drop(evicted);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_destroy_drains_in_fifo_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rb = RingBuffer::new(3).unwrap();
        for id in 1..=4 {
            rb.push(tracked(id, &log));
        }
        // 1 was evicted by the fourth push
        assert_eq!(*log.borrow(), vec![1]);

        rb.destroy();
        assert_eq!(*log.borrow(), vec![1, 2, 3, 4]);
        assert!(rb.is_destroyed());
        assert_eq!(rb.capacity(), 0);

        rb.destroy();
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_drop_releases_remaining_elements() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut rb = RingBuffer::new(3).unwrap();
            rb.push(tracked(7, &log));
            rb.push(tracked(8, &log));
        }
        let mut dropped = log.borrow().clone();
        dropped.sort_unstable();
        assert_eq!(dropped, vec![7, 8]);
    }

    #[test]
    fn test_popped_element_owned_by_caller() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rb = RingBuffer::new(2).unwrap();
        rb.push(tracked(5, &log));
        let item = rb.pop().unwrap();
        drop(rb);
        assert!(log.borrow().is_empty());
        assert_eq!(item.id, 5);
    }
}

// ============================================================================
// Dump
// ============================================================================

mod dump_tests {
    use super::*;

    #[test]
    fn test_dump_after_wraparound() {
        let mut rb = RingBuffer::new(5).unwrap();
        for v in [40, 50, 60, 70, 80] {
            rb.push(v);
        }
        rb.pop();
        rb.pop();
        rb.push(10);
        rb.push(20);
        assert_eq!(
            dump_buffer(&rb),
            "Buffer contents (capacity = 5):\n\
             head -> 60\n   : 70\n   : 80\n   : 10\ntail -> 20\n---\n"
        );
    }
}
