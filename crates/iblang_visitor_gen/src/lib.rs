#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub use paste;

/// Creates a visitor.
///
/// Every entry becomes both a free `visit_<node>` function holding the default walk, and a
/// trait method of the same name that calls it. Implementors override only the nodes they care
/// about and call the free function to keep walking.
///
/// ```
/// # use iblang_visitor_gen::visit;
/// pub struct Leaf(pub u32);
/// pub struct Pair(pub Leaf, pub Leaf);
///
/// visit! {
///     pub trait Visitor {
///         pub visit(visitor, pair: &Pair) -> Result<()> {
///             visitor.visit_leaf(&pair.0)?;
///             visitor.visit_leaf(&pair.1)
///         }
///         pub visit(_visitor, _leaf: &Leaf) -> Result<()> {
///             Ok(())
///         }
///     }
/// }
///
/// struct Sum(u32);
/// impl Visitor for Sum {
///     type Err = ();
///     fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), ()> {
///         self.0 += leaf.0;
///         Ok(())
///     }
/// }
///
/// let mut sum = Sum(0);
/// sum.visit_pair(&Pair(Leaf(1), Leaf(2))).unwrap();
/// assert_eq!(sum.0, 3);
/// ```
#[macro_export]
macro_rules! visit {
    (
        $trait_vis:vis trait $id:ident {
            $($vis:vis visit ($visitor_id:ident, $visited_id:ident: &$visited:ident) -> Result<()> $block:block)+
        }
    ) => {
        $(
        $crate::paste::paste! {
            #[allow(unused_variables)]
            $vis fn [<visit_ $visited:snake>]<V: $id + ?Sized>($visitor_id: &mut V, $visited_id: &$visited) -> std::result::Result<(), V::Err> {
                $block
            }
        }
        )+

        $trait_vis trait $id {
            type Err;

            $(
            $crate::paste::paste! {
                fn [<visit_ $visited:snake>](&mut self, $visited_id: &$visited) -> std::result::Result<(), Self::Err> {
                    [<visit_ $visited:snake>](self, $visited_id)
                }
            }
            )+
        }
    };
}
