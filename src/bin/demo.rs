use fib_heaps::{FibHeaps, HeapHandle, Heaps, MinFirst};

type Demo = FibHeaps<i32, MinFirst>;

fn extract(heaps: &mut Demo, h: HeapHandle) {
    match heaps.extract(h) {
        Ok(Some(key)) => println!("{key}"),
        Ok(None) => println!("heap is empty"),
        Err(e) => println!("extract failed: {e}"),
    }
}

fn main() -> Result<(), fib_heaps::HeapError> {
    let mut heaps = Demo::new(7);
    let h = heaps.init(7, MinFirst)?;
    let node = heaps.insert(h, 7)?;
    heaps.insert(h, 15)?;
    heaps.insert(h, 5)?;
    extract(&mut heaps, h); // 5

    for key in [20, 2, 7, 10] {
        heaps.insert(h, key)?;
    }
    println!("Changing the first 7 to 8");
    heaps.change_priority(h, node, |key| *key = 8)?;

    extract(&mut heaps, h); // 2
    extract(&mut heaps, h); // 7
    extract(&mut heaps, h); // 8
    println!("{} keys left", heaps.len(h)?);
    while !heaps.is_empty(h)? {
        extract(&mut heaps, h);
    }
    heaps.destroy(h)
}
