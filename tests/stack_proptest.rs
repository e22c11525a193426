use linkgraph::collections::EMPTY_TOP;
use linkgraph::{BoundedStack, StackError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_stack_is_lifo(items in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = BoundedStack::new(items.len());

        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(stack.push(*item), Ok(i as isize));
        }
        prop_assert!(stack.is_full());

        for item in items.iter().rev() {
            prop_assert_eq!(stack.peek(), Some(item));
            prop_assert_eq!(stack.pop(), Ok(*item));
        }

        prop_assert!(stack.is_empty());
        prop_assert_eq!(stack.top(), EMPTY_TOP);
        prop_assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_stack_never_exceeds_capacity(capacity in 0..16usize, pushes in 0..32usize) {
        let mut stack = BoundedStack::new(capacity);
        for i in 0..pushes {
            let result = stack.push(i);
            if i < capacity {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(StackError::Overflow { capacity }));
            }
        }
        prop_assert_eq!(stack.len(), pushes.min(capacity));
        prop_assert_eq!(stack.is_empty(), stack.top() == -1);
    }
}
