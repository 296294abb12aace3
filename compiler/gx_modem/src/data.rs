//! The value trees the codec understands.

use std::fmt;

use num_bigint::BigInt;

/// A value restricted to numbers, `nil` and cons pairs.
///
/// This is what crosses the wire; functions, pictures and booleans have no
/// signal representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Data {
    Nil,
    Number(BigInt),
    Cons(Box<Data>, Box<Data>),
}

impl Data {
    pub fn int(n: impl Into<BigInt>) -> Self {
        Data::Number(n.into())
    }

    pub fn cons(head: Data, tail: Data) -> Self {
        Data::Cons(Box::new(head), Box::new(tail))
    }

    /// A `nil`-terminated list of `items`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Data>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Data::Nil, |tail, head| Data::cons(head, tail))
    }

    /// A two-element vector `(x . y)`, as `vec` builds it.
    pub fn vector(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Data::cons(Data::int(x), Data::int(y))
    }

    pub fn as_number(&self) -> Option<&BigInt> {
        match self {
            Data::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Data::Nil)
    }

    /// Elements of a proper (`nil`-terminated) list, or `None` otherwise.
    ///
    /// `nil` itself is the empty list.
    pub fn as_list(&self) -> Option<Vec<&Data>> {
        let mut items = Vec::new();
        let mut cur = self;
        loop {
            match cur {
                Data::Nil => return Some(items),
                Data::Cons(head, tail) => {
                    items.push(head.as_ref());
                    cur = tail;
                }
                Data::Number(_) => return None,
            }
        }
    }
}

/// Unlinks nested pairs onto a worklist so dropping a long list or a deeply
/// nested tree never recurses.
impl Drop for Data {
    fn drop(&mut self) {
        let Data::Cons(head, tail) = self else {
            return;
        };
        let mut pending = Vec::new();
        detach_cons(head, &mut pending);
        detach_cons(tail, &mut pending);
        while let Some(mut data) = pending.pop() {
            if let Data::Cons(head, tail) = &mut data {
                detach_cons(head, &mut pending);
                detach_cons(tail, &mut pending);
            }
        }
    }
}

/// Move `slot` onto `pending` if it is a pair; leaves `nil` behind.
fn detach_cons(slot: &mut Data, pending: &mut Vec<Data>) {
    if matches!(slot, Data::Cons(..)) {
        pending.push(std::mem::replace(slot, Data::Nil));
    }
}

impl From<BigInt> for Data {
    fn from(n: BigInt) -> Self {
        Data::Number(n)
    }
}

/// Prints `nil`, decimal numbers, `( e1 , e2 )` for proper lists and
/// `ap ap cons a b` for any other pair.
impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Nil => f.write_str("nil"),
            Data::Number(n) => write!(f, "{n}"),
            Data::Cons(head, tail) => {
                if let Some(items) = self.as_list() {
                    f.write_str("(")?;
                    for (i, item) in items.into_iter().enumerate() {
                        if i > 0 {
                            f.write_str(" ,")?;
                        }
                        gx_stack::ensure_sufficient_stack(|| write!(f, " {item}"))?;
                    }
                    f.write_str(" )")
                } else {
                    gx_stack::ensure_sufficient_stack(|| write!(f, "ap ap cons {head} {tail}"))
                }
            }
        }
    }
}
