use stagger_meta::{Alias, AliasMap, PairList, TypeList, Unbound, alias, plain_pair, type_list};

alias!(pub Pusher);

#[derive(Debug, Clone, Copy, Default)]
struct Boris;

#[derive(Debug, Clone, Copy, Default)]
struct Species;

plain_pair!(Boris, Species);

type Overrides = AliasMap<type_list![Alias<Boris, Pusher>, Species]>;

fn main() {
    assert_eq!(<type_list![Alias<Boris, Pusher>, Species] as TypeList>::LEN, 2);

    let entries = <Overrides as PairList>::entries();
    assert_eq!(entries.len(), 2);

    assert!(entries[0].key_is::<Alias<Unbound, Pusher>>());
    assert!(entries[0].value_is::<Alias<Boris, Pusher>>());
    assert!(entries[1].key_is::<Species>());
    assert!(entries[1].value_is::<Species>());
}
