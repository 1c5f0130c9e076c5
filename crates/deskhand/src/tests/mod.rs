mod descriptor_loader;
