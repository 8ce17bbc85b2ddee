mod artist;
mod venue;
