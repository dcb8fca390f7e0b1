#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

fn paged(len: usize, per_page: usize) -> PagedList<usize> {
    PagedList::from_vec_with_config((0..len).collect(), PageConfig::new().per_page(per_page))
}

#[test]
fn test_page_layout() {
    let list = paged(20, 6);
    assert_eq!(list.pages(), 4);
    assert_eq!(list.page(1), Some(&[0, 1, 2, 3, 4, 5][..]));
    assert_eq!(list.page(4), Some(&[18, 19][..]), "The last page should hold the remainder.");
    assert_eq!(list.page(0), None, "Pages are numbered from 1.");
    assert_eq!(list.page(5), None, "Pages past the end should be absent.");

    let empty = PagedList::<u8>::new();
    assert_eq!(empty.pages(), 0, "An empty list should have no pages.");
    assert_eq!(empty.page(1), None);
    assert_eq!(empty.elements_per_page(), DEFAULT_PER_PAGE);
    assert_eq!(PageConfig::default().elements_per_page(), DEFAULT_PER_PAGE);
}

#[test]
fn test_auto_refresh() {
    let mut list = paged(8, 4);
    assert_eq!(list.pages(), 2);

    list.push(8);
    assert_eq!(list.pages(), 3, "Pushing should recalculate pages.");
    assert_eq!(list.page(3), Some(&[8][..]));

    list.insert(0, 100);
    assert_eq!(list.page(1), Some(&[100, 0, 1, 2][..]));

    list.remove(0);
    list.remove_item(&8);
    assert_eq!(list.pages(), 2, "Removing should recalculate pages.");

    list.set_elements_per_page(3);
    assert_eq!(list.pages(), 3, "Changing the page size should recalculate pages.");

    list.clear();
    assert_eq!(list.pages(), 0);
}

#[test]
fn test_stale_pages() {
    let mut list = paged(8, 4);
    list.set_auto_refresh(false);

    list.extend(8..12);
    assert_eq!(list.pages(), 2, "Pages shouldn't change while auto refresh is disabled.");

    list.recalculate_pages();
    assert_eq!(list.pages(), 3, "Recalculating should pick up new elements.");

    list.retain(|i| *i < 2);
    assert_eq!(list.page(1), None, "A stale page outside the list should read as absent.");

    list.set_refresh_on_read(true);
    assert_eq!(list.page(1), Some(&[0, 1][..]), "Reading should refresh pages.");
    assert_eq!(list.pages(), 1);
}

#[test]
fn test_list_operations() {
    let mut list = PagedList::from(vec!['a', 'b', 'c', 'b']);
    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.last_index_of(&'b'), Some(3));
    assert!(list.contains_all(&['a', 'c']));
    assert!(!list.contains_all(&['a', 'z']));

    assert!(list.remove_all(&['b']));
    assert_eq!(&*list, &['a', 'c']);
    assert!(!list.remove_all(&['z']), "Removing nothing should report no change.");

    list.insert_all(1, ['x', 'y']);
    assert_eq!(&*list, &['a', 'x', 'y', 'c']);
    assert_eq!(list.replace(0, 'z'), 'a');

    assert!(list.retain_all(&['x', 'z']));
    assert_eq!(list.clone().into_vec(), vec!['z', 'x']);
    assert_eq!(list.sub_list(0..1), Some(&['z'][..]));
    assert_eq!(list.sub_list(1..3), None);
    assert_eq!(list.pop(), Some('x'));
}

#[test]
fn test_panics() {
    assert_panics!({
        PageConfig::new().per_page(0);
    });
    assert_panics!({
        let mut list = paged(3, 2);
        list.set_elements_per_page(0);
    });
    assert_panics!({
        let mut list = paged(3, 2);
        list.remove(3);
    });
    assert_panics!({
        let mut list = paged(3, 2);
        list.insert(4, 0);
    });
}

proptest! {
    #[test]
    fn prop_page_sizes(len in 0_usize..200, per_page in 1_usize..20) {
        let list = paged(len, per_page);
        let pages: Vec<&[usize]> = list.iter_pages().collect();

        prop_assert_eq!(pages.len(), len.div_ceil(per_page));
        for (index, page) in pages.iter().enumerate() {
            if index + 1 < pages.len() {
                prop_assert_eq!(page.len(), per_page);
            } else {
                prop_assert!(!page.is_empty() && page.len() <= per_page);
            }
        }
        prop_assert_eq!(pages.concat(), (0..len).collect::<Vec<_>>());
    }
}
